// ============================================================================
// PROTECTED ROUTE - Aplica el guard a la vista activa
// ============================================================================
// Mientras la sesión carga se pinta un estado neutro; el contenido
// protegido no debe aparecer ni un frame antes de resolver el restore.
// ============================================================================

use yew::prelude::*;

use crate::components::spinner::Spinner;
use crate::hooks::session_context::use_session_context;
use crate::router::{self, Route};
use crate::state::guard::{self, GuardOutcome, RouteAccess};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub access: RouteAccess,
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let handle = use_session_context();
    let outcome = guard::evaluate(props.access, &handle.session);

    // El redirect va en un efecto, nunca durante el render
    use_effect_with(outcome, move |outcome| {
        match outcome {
            GuardOutcome::RedirectLogin => {
                log::info!("🔒 [GUARD] No autenticado, redirigiendo al login");
                router::replace(&Route::Login);
            }
            GuardOutcome::RedirectUnauthorized => {
                log::info!("🔒 [GUARD] Rol sin permiso para esta vista");
                router::replace(&Route::Unauthorized);
            }
            _ => {}
        }
        || ()
    });

    match outcome {
        GuardOutcome::Loading => html! { <Spinner message="Loading..." /> },
        GuardOutcome::Allow => html! { <>{props.children.clone()}</> },
        _ => Html::default(),
    }
}
