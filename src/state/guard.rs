// ============================================================================
// GUARD - Decisión de acceso por ruta
// ============================================================================
// {LOADING} -> {ALLOWED | REDIRECT_LOGIN | REDIRECT_UNAUTHORIZED}
// Se re-evalúa en cada render cuando cambian el rol o la ruta.
// ============================================================================

use crate::models::auth::Role;
use crate::state::session::Session;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteAccess {
    Public,
    Authenticated,
    RoleOnly(Role),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardOutcome {
    Loading,
    Allow,
    RedirectLogin,
    RedirectUnauthorized,
}

/// Decide si la sesión actual puede ver una ruta. Mientras la sesión está
/// cargando no se decide nada: ni contenido protegido ni redirect, para no
/// redirigir sobre un rol ausente que aún no se ha restaurado.
pub fn evaluate(access: RouteAccess, session: &Session) -> GuardOutcome {
    if access == RouteAccess::Public {
        return GuardOutcome::Allow;
    }
    if session.loading {
        return GuardOutcome::Loading;
    }
    match access {
        RouteAccess::Public => GuardOutcome::Allow,
        RouteAccess::Authenticated => {
            if session.is_authenticated() {
                GuardOutcome::Allow
            } else {
                GuardOutcome::RedirectLogin
            }
        }
        RouteAccess::RoleOnly(required) => match session.role {
            None => GuardOutcome::RedirectLogin,
            Some(role) if role == required => GuardOutcome::Allow,
            Some(_) => GuardOutcome::RedirectUnauthorized,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<Role>, loading: bool) -> Session {
        Session { role, user: None, loading }
    }

    #[test]
    fn public_routes_always_allow() {
        assert_eq!(evaluate(RouteAccess::Public, &session(None, true)), GuardOutcome::Allow);
        assert_eq!(evaluate(RouteAccess::Public, &session(None, false)), GuardOutcome::Allow);
    }

    #[test]
    fn no_decision_while_the_session_is_loading() {
        let s = session(None, true);
        assert_eq!(evaluate(RouteAccess::Authenticated, &s), GuardOutcome::Loading);
        assert_eq!(evaluate(RouteAccess::RoleOnly(Role::Photographer), &s), GuardOutcome::Loading);
    }

    #[test]
    fn unauthenticated_users_go_to_login() {
        let s = session(None, false);
        assert_eq!(evaluate(RouteAccess::Authenticated, &s), GuardOutcome::RedirectLogin);
        assert_eq!(
            evaluate(RouteAccess::RoleOnly(Role::Photographer), &s),
            GuardOutcome::RedirectLogin
        );
    }

    #[test]
    fn customer_cannot_enter_photographer_views() {
        let s = session(Some(Role::Customer), false);
        assert_eq!(
            evaluate(RouteAccess::RoleOnly(Role::Photographer), &s),
            GuardOutcome::RedirectUnauthorized
        );
    }

    #[test]
    fn photographer_enters_photographer_views() {
        let s = session(Some(Role::Photographer), false);
        assert_eq!(
            evaluate(RouteAccess::RoleOnly(Role::Photographer), &s),
            GuardOutcome::Allow
        );
        assert_eq!(evaluate(RouteAccess::Authenticated, &s), GuardOutcome::Allow);
    }

    #[test]
    fn admin_is_not_a_photographer() {
        let s = session(Some(Role::Admin), false);
        assert_eq!(
            evaluate(RouteAccess::RoleOnly(Role::Photographer), &s),
            GuardOutcome::RedirectUnauthorized
        );
    }
}
