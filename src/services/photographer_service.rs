// ============================================================================
// PHOTOGRAPHER SERVICE - Listados y perfiles
// ============================================================================

use serde_json::Value;

use crate::models::photographer::{
    FullProfileResponse, FullProfileUpdateRequest, Photographer, UpdateProfileRequest,
};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn fetch_photographers() -> Result<Vec<Photographer>, ApiError> {
    let list: Vec<Photographer> = ApiClient::new().get_json("/api/photographers/").await?;
    log::info!("📷 [PHOTOGRAPHERS] {} fotógrafos cargados", list.len());
    Ok(list)
}

pub async fn fetch_photographer(id: &str) -> Result<Photographer, ApiError> {
    ApiClient::new().get_json(&format!("/api/photographers/{}", id)).await
}

pub async fn fetch_full_profile(id: &str) -> Result<FullProfileResponse, ApiError> {
    ApiClient::new()
        .get_json(&format!("/api/photographers/{}/full-profile", id))
        .await
}

/// Perfil propio para el portfolio.
pub async fn fetch_own_profile() -> Result<Photographer, ApiError> {
    let value: Value = ApiClient::new().get_json("/api/photographers/profile/me").await?;
    unwrap_profile_envelope(value)
}

/// Perfil propio para los formularios de edición.
pub async fn fetch_editable_profile() -> Result<Photographer, ApiError> {
    let value: Value = ApiClient::new().get_json("/api/photographers/profile").await?;
    unwrap_profile_envelope(value)
}

pub async fn save_profile(request: &UpdateProfileRequest) -> Result<(), ApiError> {
    let _: Value = ApiClient::new().post_json("/api/photographers/profile", request).await?;
    log::info!("💾 [PHOTOGRAPHERS] Perfil guardado");
    Ok(())
}

pub async fn save_full_profile(request: &FullProfileUpdateRequest) -> Result<(), ApiError> {
    let _: Value = ApiClient::new()
        .put_json("/api/photographers/profile/full", request)
        .await?;
    log::info!("💾 [PHOTOGRAPHERS] Perfil completo guardado");
    Ok(())
}

/// El backend a veces envuelve el perfil propio en {"profile": {...}} y a
/// veces lo manda pelado. Se aceptan las dos formas.
fn unwrap_profile_envelope(value: Value) -> Result<Photographer, ApiError> {
    let inner = match value.get("profile") {
        Some(profile) if !profile.is_null() => profile.clone(),
        _ => value,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_the_profile_envelope() {
        let wrapped = json!({"profile": {"_id": "ph1", "name": "Lens Studio"}});
        let profile = unwrap_profile_envelope(wrapped).unwrap();
        assert_eq!(profile.name, "Lens Studio");
    }

    #[test]
    fn accepts_a_bare_profile_too() {
        let bare = json!({"_id": "ph2", "name": "Foto Sur", "city": "Valencia"});
        let profile = unwrap_profile_envelope(bare).unwrap();
        assert_eq!(profile.city, "Valencia");
    }

    #[test]
    fn null_envelope_falls_back_to_the_root_object() {
        let with_null = json!({"profile": null, "name": "Raíz"});
        let profile = unwrap_profile_envelope(with_null).unwrap();
        assert_eq!(profile.name, "Raíz");
    }
}
