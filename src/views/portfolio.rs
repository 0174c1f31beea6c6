use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::RouteLink;
use crate::models::photographer::Photographer;
use crate::router::Route;
use crate::services::photographer_service;
use crate::utils::format::format_inr;

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let profile = use_state(|| None::<Photographer>);
    let loading = use_state(|| true);

    {
        let profile = profile.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match photographer_service::fetch_own_profile().await {
                    Ok(own) => profile.set(Some(own)),
                    // Sin perfil todavía: se enseña el estado vacío
                    Err(e) => {
                        log::info!("ℹ️ [PORTFOLIO] Sin perfil propio ({})", e);
                        profile.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="portfolio-container">
                <div class="skeleton-cover"></div>
                <div class="skeleton-header"></div>
                <div class="skeleton-card large"></div>
                <div class="skeleton-card"></div>
            </div>
        };
    }

    let Some(p) = (*profile).clone() else {
        return html! {
            <div class="empty-portfolio">
                <div class="empty-illustration">{"📸"}</div>
                <h2>{"Your portfolio is empty"}</h2>
                <p>{"Create your photographer profile to attract clients."}</p>
                <RouteLink to={Route::ProfileEdit} class="btn">{"Create Profile"}</RouteLink>
            </div>
        };
    };

    let cover = p
        .cover_image
        .clone()
        .unwrap_or_else(|| "/placeholder-cover.jpg".to_string());

    html! {
        <div class="portfolio-container">
            <section class="hero-cover">
                <img src={cover} class="cover-image" />
                <div class="hero-overlay">
                    <h1>{p.name.clone()}</h1>
                    <p>{format!("📍 {} • {}+ yrs experience", p.city, p.experience)}</p>
                    <p class="bio">{p.bio.clone()}</p>

                    <span class={classes!("status", if p.is_available() { "on" } else { "off" })}>
                        {if p.is_available() { "Available for Booking" } else { "Not Available" }}
                    </span>
                </div>
            </section>

            <div class="actions-bar">
                <RouteLink to={Route::ProfileEdit} class="btn">{"✏️ Edit Profile"}</RouteLink>
                <RouteLink to={Route::ProfileManage} class="btn">{"🗂️ Manage Full Profile"}</RouteLink>
            </div>

            <section class="services-section">
                <h2>{"Services"}</h2>

                if p.services.is_empty() {
                    <p class="empty-services">{"No services added yet."}</p>
                } else {
                    <div class="services-grid">
                        { for p.services.iter().map(|s| html! {
                            <div class="service-card">
                                <h3>{s.title.clone()}</h3>
                                <p class="price">{format_inr(s.price)}</p>
                                <p>{s.description.clone()}</p>
                            </div>
                        }) }
                    </div>
                }
            </section>
        </div>
    }
}
