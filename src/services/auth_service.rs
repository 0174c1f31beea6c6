// ============================================================================
// AUTH SERVICE - Llamadas de autenticación
// ============================================================================
// Estas llamadas NO pasan por el ApiClient: un 401 aquí significa
// "credenciales inválidas" o "no hay sesión que restaurar", no una sesión
// caducada a mitad de uso, así que el error vuelve al caller en vez de
// disparar la invalidación global.
// ============================================================================

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::models::auth::{
    LoginRequest, LoginResponse, MeResponse, RegisterRequest, RegisterResponse, User,
};
use crate::services::api_client::{extract_server_message, ApiError};
use crate::utils::constants::BACKEND_URL;

/// Login con email y contraseña. La cookie de sesión la pone el backend
/// en la respuesta; aquí solo interesa el rol para el redirect.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/api/auth/login", BACKEND_URL);
    let body = LoginRequest { email: email.to_string(), password: password.to_string() };

    log::info!("🔐 [AUTH] Login para {}", email);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let message = extract_server_message(&text, status);
        return Err(ApiError::Server { status, message });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    let url = format!("{}/api/auth/register", BACKEND_URL);

    log::info!("📝 [AUTH] Registro de {} como {}", request.email, request.role);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let message = extract_server_message(&text, status);
        return Err(ApiError::Server { status, message });
    }

    response
        .json::<RegisterResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Valida la cookie de sesión contra GET /api/auth/me.
/// 401 = no hay sesión (visitante anónimo incluido); se devuelve como
/// SessionExpired sin efectos secundarios para que el restore decida.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let url = format!("{}/api/auth/me", BACKEND_URL);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if status == 401 {
        return Err(ApiError::SessionExpired);
    }
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let message = extract_server_message(&text, status);
        return Err(ApiError::Server { status, message });
    }

    response
        .json::<MeResponse>()
        .await
        .map(|me| me.user)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Logout remoto, best-effort: el estado local ya se limpió antes de
/// llamar y un fallo aquí solo se loguea.
pub async fn logout() -> Result<(), ApiError> {
    let url = format!("{}/api/auth/logout", BACKEND_URL);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::Server { status, message: extract_server_message(&text, status) });
    }
    Ok(())
}
