// ============================================================================
// ROUTER - Rutas in-app sobre la History API
// ============================================================================
// pushState no emite popstate, así que cada navegación propia dispara
// además un evento de ventana que escucha use_route.
// ============================================================================

use wasm_bindgen::JsValue;

use crate::models::auth::Role;
use crate::state::guard::RouteAccess;
use crate::utils::constants::ROUTE_CHANGED_EVENT;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Login,
    Register,
    Photographers,
    PhotographerDetail { id: String },
    PhotographerFullProfile { id: String },
    BookingForm { id: String },
    CustomerBookings,
    Dashboard,
    PhotographerBookings,
    Portfolio,
    ProfileEdit,
    ProfileManage,
    Unauthorized,
    NotFound,
}

impl Route {
    /// Parse total de un pathname. Query y hash se ignoran; los segmentos
    /// reservados bajo /photographers van antes que el match por id.
    pub fn parse(path: &str) -> Route {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["photographers"] => Route::Photographers,
            ["photographers", "dashboard"] => Route::Dashboard,
            ["photographers", "bookings"] => Route::PhotographerBookings,
            ["photographers", "portfolio"] => Route::Portfolio,
            ["photographers", "profile"] => Route::ProfileEdit,
            ["photographers", "profile", "manage"] => Route::ProfileManage,
            ["photographers", id] => Route::PhotographerDetail { id: (*id).to_string() },
            ["photographers", id, "profile"] => {
                Route::PhotographerFullProfile { id: (*id).to_string() }
            }
            ["booking", id] => Route::BookingForm { id: (*id).to_string() },
            ["customer", "bookings"] => Route::CustomerBookings,
            ["unauthorized"] => Route::Unauthorized,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Photographers => "/photographers".to_string(),
            Route::PhotographerDetail { id } => format!("/photographers/{}", id),
            Route::PhotographerFullProfile { id } => format!("/photographers/{}/profile", id),
            Route::BookingForm { id } => format!("/booking/{}", id),
            Route::CustomerBookings => "/customer/bookings".to_string(),
            Route::Dashboard => "/photographers/dashboard".to_string(),
            Route::PhotographerBookings => "/photographers/bookings".to_string(),
            Route::Portfolio => "/photographers/portfolio".to_string(),
            Route::ProfileEdit => "/photographers/profile".to_string(),
            Route::ProfileManage => "/photographers/profile/manage".to_string(),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Requisito de acceso de cada ruta; el guard lo evalúa en cada render.
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::BookingForm { .. } | Route::CustomerBookings => RouteAccess::Authenticated,
            Route::Dashboard
            | Route::PhotographerBookings
            | Route::Portfolio
            | Route::ProfileEdit
            | Route::ProfileManage => RouteAccess::RoleOnly(Role::Photographer),
            _ => RouteAccess::Public,
        }
    }

    /// Vista de aterrizaje tras el login según el rol.
    pub fn landing_for(role: Role) -> Route {
        match role {
            Role::Photographer => Route::Dashboard,
            _ => Route::Home,
        }
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate(route: &Route) {
    push_path(&route.path());
}

/// Como navigate pero sin dejar entrada en el historial (redirects).
pub fn replace(route: &Route) {
    replace_path(&route.path());
}

pub fn push_path(path: &str) {
    apply_history(path, false);
}

pub fn replace_path(path: &str) {
    apply_history(path, true);
}

fn apply_history(path: &str, replace_entry: bool) {
    if let Some(win) = web_sys::window() {
        if let Ok(history) = win.history() {
            let result = if replace_entry {
                history.replace_state_with_url(&JsValue::NULL, "", Some(path))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(path))
            };
            if let Err(e) = result {
                log::error!("❌ [ROUTER] No se pudo actualizar el history: {:?}", e);
                return;
            }
        }
        if let Ok(event) = web_sys::CustomEvent::new(ROUTE_CHANGED_EVENT) {
            let _ = win.dispatch_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_path_round_trip() {
        let routes = vec![
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Photographers,
            Route::PhotographerDetail { id: "ph1".to_string() },
            Route::PhotographerFullProfile { id: "ph1".to_string() },
            Route::BookingForm { id: "ph1".to_string() },
            Route::CustomerBookings,
            Route::Dashboard,
            Route::PhotographerBookings,
            Route::Portfolio,
            Route::ProfileEdit,
            Route::ProfileManage,
            Route::Unauthorized,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route, "ruta {:?}", route);
        }
    }

    #[test]
    fn reserved_segments_win_over_ids() {
        assert_eq!(Route::parse("/photographers/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/photographers/profile"), Route::ProfileEdit);
        assert_eq!(
            Route::parse("/photographers/profile/manage"),
            Route::ProfileManage
        );
        assert_eq!(
            Route::parse("/photographers/abc123"),
            Route::PhotographerDetail { id: "abc123".to_string() }
        );
    }

    #[test]
    fn query_and_hash_are_ignored() {
        assert_eq!(Route::parse("/login?session=expired"), Route::Login);
        assert_eq!(Route::parse("/photographers#top"), Route::Photographers);
    }

    #[test]
    fn trailing_slashes_do_not_matter() {
        assert_eq!(Route::parse("/photographers/"), Route::Photographers);
        assert_eq!(Route::parse("//login//"), Route::Login);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/admin/panel/x"), Route::NotFound);
        assert_eq!(Route::parse("/booking"), Route::NotFound);
    }

    #[test]
    fn access_map_covers_the_protected_sections() {
        use crate::models::auth::Role;
        use crate::state::guard::RouteAccess;

        assert_eq!(Route::Home.access(), RouteAccess::Public);
        assert_eq!(
            Route::BookingForm { id: "x".to_string() }.access(),
            RouteAccess::Authenticated
        );
        assert_eq!(Route::CustomerBookings.access(), RouteAccess::Authenticated);
        assert_eq!(Route::Dashboard.access(), RouteAccess::RoleOnly(Role::Photographer));
        assert_eq!(Route::ProfileManage.access(), RouteAccess::RoleOnly(Role::Photographer));
    }

    #[test]
    fn landing_depends_on_the_role() {
        use crate::models::auth::Role;
        assert_eq!(Route::landing_for(Role::Customer), Route::Home);
        assert_eq!(Route::landing_for(Role::Photographer), Route::Dashboard);
        assert_eq!(Route::landing_for(Role::Admin), Route::Home);
    }
}
