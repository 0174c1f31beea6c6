use yew::prelude::*;

use crate::components::route_link::RouteLink;
use crate::hooks::session_context::use_session_context;
use crate::models::auth::Role;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let handle = use_session_context();
    let menu_open = use_state(|| false);

    // Placeholder mientras el restore hidrata el rol, para no mover el layout
    if handle.is_loading() {
        return html! { <div class="navbar-placeholder" style="height:64px"></div> };
    }

    let role = handle.role();
    let is_photographer = role == Some(Role::Photographer);
    let is_customer = role == Some(Role::Customer);

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let menu_open = menu_open.clone();
        let logout = handle.logout.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            logout.emit(());
        })
    };

    let nav_class = if *menu_open { "nav-links open" } else { "nav-links" };
    let hamburger_class = if *menu_open { "hamburger active" } else { "hamburger" };

    html! {
        <header class="navbar">
            <div class="nav-container">
                <RouteLink to={Route::Home} class="logo" on_click={close_menu.clone()}>
                    <span class="logo-icon">{"📸"}</span>
                    <span>{"PhotoRide"}</span>
                </RouteLink>

                <nav class={nav_class}>
                    if !is_photographer {
                        <RouteLink to={Route::Photographers} on_click={close_menu.clone()}>
                            {"Find Photographers"}
                        </RouteLink>
                    }

                    if handle.is_authenticated() {
                        if is_customer {
                            <RouteLink to={Route::CustomerBookings} on_click={close_menu.clone()}>
                                {"My Bookings"}
                            </RouteLink>
                        }
                        if is_photographer {
                            <RouteLink to={Route::Dashboard} on_click={close_menu.clone()}>
                                {"Dashboard"}
                            </RouteLink>
                            <RouteLink to={Route::PhotographerBookings} on_click={close_menu.clone()}>
                                {"Manage Bookings"}
                            </RouteLink>
                            <RouteLink to={Route::Portfolio} on_click={close_menu.clone()}>
                                {"Portfolio"}
                            </RouteLink>
                        }
                        <div class="user-section">
                            <span class="user-greeting">
                                {if is_photographer { "👋 Hi, Photographer" } else { "👋 Hi, Explorer" }}
                            </span>
                            <button onclick={on_logout} class="logout-btn">{"Logout"}</button>
                        </div>
                    } else {
                        <RouteLink to={Route::Login} on_click={close_menu.clone()}>
                            {"Login"}
                        </RouteLink>
                        <RouteLink to={Route::Register} class="nav-cta" on_click={close_menu}>
                            {"Join as Photographer"}
                        </RouteLink>
                    }
                </nav>

                <button class={hamburger_class} onclick={toggle_menu} aria-label="Toggle menu">
                    <span /><span /><span />
                </button>
            </div>
        </header>
    }
}
