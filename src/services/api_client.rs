// ============================================================================
// API CLIENT - Punto único de salida hacia el backend
// ============================================================================
// Todas las páginas pasan por aquí: adjunta la cookie de sesión, traduce
// respuestas no-2xx al mensaje del servidor y convierte cualquier 401 en
// la invalidación global de la sesión.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::RequestCredentials;

use crate::router;
use crate::state::session::RoleCache;
use crate::utils::constants::{BACKEND_URL, SESSION_EXPIRED_EVENT};
use crate::utils::storage::LocalRoleCache;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401 del backend: la cookie ya no vale.
    SessionExpired,
    /// Respuesta no-2xx con el mensaje que mandó el servidor.
    Server { status: u16, message: String },
    /// El fetch ni siquiera llegó (sin red, CORS, DNS...).
    Network(String),
    /// 2xx con un cuerpo que no parsea al tipo esperado.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::SessionExpired => write!(f, "Session expired. Please login again."),
            ApiError::Server { message, .. } => write!(f, "{}", message),
            ApiError::Network(detail) => write!(f, "Cannot connect to server ({})", detail),
            ApiError::Decode(detail) => write!(f, "Unexpected response from server ({})", detail),
        }
    }
}

/// Extrae el "message" del cuerpo de error JSON; si no hay, un genérico
/// con el código de estado.
pub(crate) fn extract_server_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

pub(crate) fn error_from_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        ApiError::SessionExpired
    } else {
        ApiError::Server { status, message: extract_server_message(body, status) }
    }
}

/// Cliente stateless: solo conoce la URL base.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { base_url: BACKEND_URL.to_string() }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::put(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::patch(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status == 401 {
        log::warn!("⚠️ [API] 401 del backend, invalidando sesión local");
        expire_session();
        return Err(ApiError::SessionExpired);
    }

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Única vía por la que un 401 limpia el estado de sesión: borra el hint,
/// avisa al hook de sesión y manda al login con el indicador de caducidad.
fn expire_session() {
    LocalRoleCache.clear();
    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(SESSION_EXPIRED_EVENT) {
            let _ = win.dispatch_event(&event);
        }
    }
    router::replace_path("/login?session=expired");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_401_maps_to_session_expired() {
        assert_eq!(error_from_status(401, r#"{"message":"No token"}"#), ApiError::SessionExpired);
    }

    #[test]
    fn server_errors_carry_the_backend_message() {
        let error = error_from_status(404, r#"{"message":"Photographer not found"}"#);
        assert_eq!(
            error,
            ApiError::Server { status: 404, message: "Photographer not found".to_string() }
        );
        assert_eq!(error.to_string(), "Photographer not found");
    }

    #[test]
    fn unparseable_bodies_fall_back_to_the_status_code() {
        let error = error_from_status(500, "<html>Internal Server Error</html>");
        assert_eq!(error, ApiError::Server { status: 500, message: "HTTP 500".to_string() });
    }

    #[test]
    fn empty_message_fields_also_fall_back() {
        assert_eq!(extract_server_message(r#"{"message":""}"#, 400), "HTTP 400");
        assert_eq!(extract_server_message(r#"{"error":"x"}"#, 422), "HTTP 422");
    }
}
