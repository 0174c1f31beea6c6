// ============================================================================
// USE SESSION - Estado de sesión como hook de Yew
// ============================================================================
// Dueño del restore por carga de página, del redirect por rol tras el
// login y de la escucha del 401 global. Las páginas solo emiten callbacks.
// ============================================================================

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::auth::{Role, User};
use crate::router::{self, Route};
use crate::services::auth_service;
use crate::state::session::Session;
use crate::utils::constants::SESSION_EXPIRED_EVENT;
use crate::utils::storage::LocalRoleCache;

/// Handle que se comparte por context: estado + operaciones.
#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: UseStateHandle<Session>,
    pub login: Callback<(Role, Option<User>)>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_state(|| Session::restoring(&LocalRoleCache));

    // restore() una sola vez por carga + listener del 401 global
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            {
                let session = session.clone();
                spawn_local(async move {
                    let outcome = auth_service::fetch_current_user().await;
                    match &outcome {
                        Ok(user) => log::info!("✅ [SESSION] Sesión restaurada como {}", user.role),
                        Err(e) => log::info!("ℹ️ [SESSION] Sin sesión activa ({})", e),
                    }
                    let mut next = (*session).clone();
                    next.apply_restore(outcome, &LocalRoleCache);
                    session.set(next);
                });
            }

            // Un 401 en cualquier llamada de datos invalida la sesión entera
            let listener = {
                let session = session.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    log::warn!("⚠️ [SESSION] Sesión caducada, limpiando estado local");
                    let mut next = (*session).clone();
                    next.clear(&LocalRoleCache);
                    session.set(next);
                }) as Box<dyn FnMut(web_sys::Event)>)
            };
            if let Some(win) = web_sys::window() {
                let _ = win.add_event_listener_with_callback(
                    SESSION_EXPIRED_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }
            // Se registra una vez por carga de página; se deja vivo a propósito
            listener.forget();
            || ()
        });
    }

    // El redirect por rol tras el login vive aquí, no en las páginas
    let login = {
        let session = session.clone();
        Callback::from(move |(role, user): (Role, Option<User>)| {
            let mut next = (*session).clone();
            next.apply_login(role, user, &LocalRoleCache);
            session.set(next);
            log::info!("✅ [SESSION] Login como {}", role);
            router::replace(&Route::landing_for(role));
        })
    };

    // Primero la limpieza local (siempre funciona), luego el backend
    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            next.clear(&LocalRoleCache);
            session.set(next);
            spawn_local(async move {
                if let Err(e) = auth_service::logout().await {
                    log::warn!("⚠️ [SESSION] Logout remoto falló (ignorado): {}", e);
                }
            });
            log::info!("👋 [SESSION] Logout");
            router::replace(&Route::Home);
        })
    };

    UseSessionHandle { session, login, logout }
}
