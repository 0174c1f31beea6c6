use yew::prelude::*;

use crate::components::RouteLink;
use crate::router::Route;

/// Aterrizaje para sesiones autenticadas con el rol equivocado.
#[function_component(UnauthorizedPage)]
pub fn unauthorized_page() -> Html {
    html! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <div class="icon">{"🚫"}</div>
                <h1>{"Access denied"}</h1>
                <p>{"Your account doesn't have permission to view this page."}</p>
                <div class="actions">
                    <RouteLink to={Route::Home} class="btn primary">{"Go Home"}</RouteLink>
                    <RouteLink to={Route::Photographers} class="btn secondary">
                        {"Browse Photographers"}
                    </RouteLink>
                </div>
            </div>
        </div>
    }
}
