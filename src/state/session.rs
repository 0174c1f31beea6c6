// ============================================================================
// SESSION - Fuente única de verdad de "quién está logueado y con qué rol"
// ============================================================================
// Ciclo de vida: restoring() -> apply_restore() -> apply_login()/clear()
// Sin globales: el valor vive en el hook de sesión y se inyecta el cache,
// así cada test construye el suyo.
// ============================================================================

use crate::models::auth::{Role, User};
use crate::services::api_client::ApiError;

/// Cache no autoritativo del rol. Sirve para pintar optimista mientras
/// el restore valida la cookie contra el backend; nunca concede acceso.
pub trait RoleCache {
    fn load(&self) -> Option<Role>;
    fn store(&self, role: Role);
    fn clear(&self);
}

#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub role: Option<Role>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    /// Estado inicial de una carga de página. El hint del cache se adopta
    /// de forma provisional hasta que /api/auth/me responda.
    pub fn restoring(cache: &dyn RoleCache) -> Self {
        Self {
            role: cache.load(),
            user: None,
            loading: true,
        }
    }

    /// Invariante: hay rol si y solo si hay sesión autenticada.
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Resultado del restore contra GET /api/auth/me.
    /// Cualquier fallo degrada a "no autenticado": un 401 además borra el
    /// hint; un fallo de red lo conserva (sin backend no hay dato nuevo,
    /// y el hint por sí solo no abre nada).
    pub fn apply_restore(&mut self, outcome: Result<User, ApiError>, cache: &dyn RoleCache) {
        match outcome {
            Ok(user) => {
                cache.store(user.role);
                self.role = Some(user.role);
                self.user = Some(user);
            }
            Err(error) => {
                if error == ApiError::SessionExpired {
                    cache.clear();
                }
                self.role = None;
                self.user = None;
            }
        }
        self.loading = false;
    }

    pub fn apply_login(&mut self, role: Role, user: Option<User>, cache: &dyn RoleCache) {
        cache.store(role);
        self.role = Some(role);
        self.user = user;
        self.loading = false;
    }

    /// Limpieza local. Idempotente y sin red: el logout remoto es cosa
    /// del caller y puede fallar sin afectar a esto.
    pub fn clear(&mut self, cache: &dyn RoleCache) {
        cache.clear();
        self.role = None;
        self.user = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryCache {
        role: RefCell<Option<Role>>,
    }

    impl RoleCache for MemoryCache {
        fn load(&self) -> Option<Role> {
            *self.role.borrow()
        }
        fn store(&self, role: Role) {
            *self.role.borrow_mut() = Some(role);
        }
        fn clear(&self) {
            *self.role.borrow_mut() = None;
        }
    }

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn restore_with_nothing_stored_and_no_backend_session() {
        let cache = MemoryCache::default();
        let mut session = Session::restoring(&cache);
        assert!(session.loading);
        assert_eq!(session.role, None);

        session.apply_restore(Err(ApiError::SessionExpired), &cache);
        assert!(!session.loading);
        assert!(!session.is_authenticated());
        assert_eq!(session.role, None);
    }

    #[test]
    fn login_then_reload_restores_the_same_role() {
        let cache = MemoryCache::default();
        let mut session = Session::restoring(&cache);
        session.apply_restore(Err(ApiError::SessionExpired), &cache);

        session.apply_login(Role::Customer, Some(user(Role::Customer)), &cache);
        assert!(session.is_authenticated());

        // Simula la recarga: nueva sesión, mismo cache, backend confirma
        let mut reloaded = Session::restoring(&cache);
        assert_eq!(reloaded.role, Some(Role::Customer));
        assert!(reloaded.loading);
        reloaded.apply_restore(Ok(user(Role::Customer)), &cache);
        assert_eq!(reloaded.role, Some(Role::Customer));
        assert!(!reloaded.loading);
    }

    #[test]
    fn logout_clears_locally_even_if_the_remote_call_failed() {
        let cache = MemoryCache::default();
        let mut session = Session::restoring(&cache);
        session.apply_login(Role::Photographer, None, &cache);

        // El POST /logout falló por red; la limpieza local no depende de él
        session.clear(&cache);
        assert!(!session.is_authenticated());
        assert_eq!(cache.load(), None);

        // Idempotente
        session.clear(&cache);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn network_failure_on_restore_degrades_to_logged_out() {
        let cache = MemoryCache::default();
        cache.store(Role::Photographer);

        let mut session = Session::restoring(&cache);
        assert_eq!(session.role, Some(Role::Photographer));

        session.apply_restore(Err(ApiError::Network("fetch failed".to_string())), &cache);
        assert!(!session.is_authenticated());
        // El hint sobrevive a un corte de red, pero no autentica nada
        assert_eq!(cache.load(), Some(Role::Photographer));
    }

    #[test]
    fn expired_session_on_restore_clears_the_hint() {
        let cache = MemoryCache::default();
        cache.store(Role::Customer);

        let mut session = Session::restoring(&cache);
        session.apply_restore(Err(ApiError::SessionExpired), &cache);
        assert_eq!(session.role, None);
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn restore_adopts_the_server_role_over_the_hint() {
        let cache = MemoryCache::default();
        cache.store(Role::Customer);

        let mut session = Session::restoring(&cache);
        session.apply_restore(Ok(user(Role::Photographer)), &cache);
        assert_eq!(session.role, Some(Role::Photographer));
        assert_eq!(cache.load(), Some(Role::Photographer));
    }
}
