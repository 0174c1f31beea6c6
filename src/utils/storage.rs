use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::models::auth::Role;
use crate::state::session::RoleCache;
use crate::utils::constants::STORAGE_KEY_ROLE;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Hint de rol respaldado por localStorage.
/// No es autoritativo: un rol aquí sin cookie viva no da acceso a nada.
pub struct LocalRoleCache;

impl RoleCache for LocalRoleCache {
    fn load(&self) -> Option<Role> {
        let raw: String = load_from_storage(STORAGE_KEY_ROLE)?;
        Role::parse(&raw)
    }

    fn store(&self, role: Role) {
        if let Err(e) = save_to_storage(STORAGE_KEY_ROLE, &role.as_str().to_string()) {
            log::warn!("⚠️ [STORAGE] No se pudo guardar el hint de rol: {}", e);
        }
    }

    fn clear(&self) {
        let _ = remove_from_storage(STORAGE_KEY_ROLE);
    }
}
