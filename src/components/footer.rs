use yew::prelude::*;

use crate::components::route_link::RouteLink;
use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <span class="logo-icon">{"📸"}</span>
                    <span>{"PhotoRide"}</span>
                    <p>{"Book professional photographers anytime, anywhere."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    <RouteLink to={Route::Photographers}>{"Photographers"}</RouteLink>
                    <RouteLink to={Route::Register}>{"Become a Photographer"}</RouteLink>
                </div>
                <div class="footer-links">
                    <h4>{"Account"}</h4>
                    <RouteLink to={Route::Login}>{"Login"}</RouteLink>
                    <RouteLink to={Route::Register}>{"Register"}</RouteLink>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2025 PhotoRide. All rights reserved."}</p>
            </div>
        </footer>
    }
}
