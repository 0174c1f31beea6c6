/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5000 (por defecto)
/// - Producción: via BACKEND_URL en .env
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Hint de rol en localStorage. Solo sirve para pintar optimista durante
/// el restore; la cookie HttpOnly del backend es la fuente de verdad.
pub const STORAGE_KEY_ROLE: &str = "photoride_role";

/// Evento global que emite el api client cuando el backend responde 401.
pub const SESSION_EXPIRED_EVENT: &str = "photoride:session-expired";

/// Evento interno de navegación (pushState no dispara popstate).
pub const ROUTE_CHANGED_EVENT: &str = "photoride:route-changed";
