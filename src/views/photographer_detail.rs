use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{RouteLink, Spinner};
use crate::hooks::session_context::use_session_context;
use crate::models::photographer::Photographer;
use crate::router::{self, Route};
use crate::services::photographer_service;
use crate::utils::format::format_inr;

#[derive(Properties, PartialEq)]
pub struct PhotographerDetailProps {
    pub id: String,
}

#[function_component(PhotographerDetailPage)]
pub fn photographer_detail_page(props: &PhotographerDetailProps) -> Html {
    let handle = use_session_context();
    let photographer = use_state(|| None::<Photographer>);
    let loading = use_state(|| true);

    {
        let photographer = photographer.clone();
        let loading = loading.clone();
        // Re-fetch si cambia el id de la URL
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match photographer_service::fetch_photographer(&id).await {
                    Ok(profile) => photographer.set(Some(profile)),
                    Err(e) => {
                        log::error!("❌ [DETAIL] Error cargando fotógrafo {}: {}", id, e);
                        photographer.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_book = {
        let id = props.id.clone();
        let authenticated = handle.is_authenticated();
        Callback::from(move |_: MouseEvent| {
            if authenticated {
                router::navigate(&Route::BookingForm { id: id.clone() });
            } else {
                router::navigate(&Route::Login);
            }
        })
    };

    if *loading {
        return html! { <Spinner message="Loading profile..." /> };
    }

    let Some(p) = (*photographer).clone() else {
        return html! {
            <div class="error-state">
                <p>{"Photographer not found"}</p>
                <RouteLink to={Route::Photographers} class="btn">{"Back to list"}</RouteLink>
            </div>
        };
    };

    let cover = p
        .cover_image
        .clone()
        .unwrap_or_else(|| "/placeholder.jpg".to_string());

    html! {
        <section class="photographer-details">
            <div class="details-hero">
                <div class="hero-image-wrapper">
                    <img src={cover} alt={p.name.clone()} class="hero-image" />
                </div>

                <div class="details-info">
                    <h1 class="fade-in">{p.name.clone()}</h1>
                    <p class="location fade-in delay-1">
                        {format!("{} • {}", p.category, p.city)}
                    </p>

                    <div class="stats fade-in delay-2">
                        <div class="stat-item">
                            <span class="stat-icon">{"⭐"}</span>
                            <span>{p.rating}</span>
                        </div>
                        <div class="stat-item">
                            <span class="stat-icon">{"📸"}</span>
                            <span>{format!("{}+ yrs", p.experience)}</span>
                        </div>
                        <div class="stat-item">
                            <span class="stat-icon">{"💰"}</span>
                            <span>{format!("from {}", format_inr(p.price))}</span>
                        </div>
                    </div>

                    <p class="description">{p.about().to_string()}</p>

                    <div class="details-actions">
                        <button class="btn primary" onclick={on_book}>{"Book Now"}</button>
                        <RouteLink
                            to={Route::PhotographerFullProfile { id: p.id.clone() }}
                            class="btn secondary"
                        >
                            {"View Full Profile"}
                        </RouteLink>
                    </div>
                </div>
            </div>

            if !p.services.is_empty() {
                <div class="services-section">
                    <h2>{"Services"}</h2>
                    <div class="services-grid">
                        { for p.services.iter().map(|s| html! {
                            <div class="service-card">
                                <h3>{s.title.clone()}</h3>
                                <p class="price">{format_inr(s.price)}</p>
                                <p>{s.description.clone()}</p>
                            </div>
                        }) }
                    </div>
                </div>
            }
        </section>
    }
}
