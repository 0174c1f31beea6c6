use yew::prelude::*;

use crate::components::RouteLink;
use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
            <RouteLink to={Route::Home} class="btn">{"Back to Home"}</RouteLink>
        </div>
    }
}
