use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{RouteLink, SearchBar};
use crate::models::photographer::Photographer;
use crate::router::Route;
use crate::services::photographer_service;
use crate::utils::format::format_inr;

#[function_component(PhotographersPage)]
pub fn photographers_page() -> Html {
    let photographers = use_state(Vec::<Photographer>::new);
    let search = use_state(String::new);
    let loading = use_state(|| true);

    {
        let photographers = photographers.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match photographer_service::fetch_photographers().await {
                    Ok(list) => photographers.set(list),
                    Err(e) => log::error!("❌ [PHOTOGRAPHERS] Error cargando listado: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |query: String| search.set(query))
    };

    let filtered: Vec<Photographer> = photographers
        .iter()
        .filter(|p| p.matches_query(&search))
        .cloned()
        .collect();

    html! {
        <section class="photographers-page">
            <header class="photographers-header">
                <h1>{"Find Professional Photographers"}</h1>
                <p>{"Browse verified photographers near you"}</p>

                <SearchBar
                    placeholder="Search by name, city or category..."
                    on_search={on_search}
                />
            </header>

            if *loading {
                <div class="loading-state">
                    <p>{"Loading photographers..."}</p>
                </div>
            } else if filtered.is_empty() {
                <div class="empty-state">
                    <p>
                        {if search.is_empty() {
                            "No photographers available at the moment."
                        } else {
                            "No photographers match your search."
                        }}
                    </p>
                </div>
            } else {
                <div class="photographer-grid">
                    { for filtered.iter().map(photographer_card) }
                </div>
            }
        </section>
    }
}

fn photographer_card(p: &Photographer) -> Html {
    let cover = p
        .cover_image
        .clone()
        .unwrap_or_else(|| "/placeholder.jpg".to_string());

    html! {
        <div class="photographer-card" key={p.id.clone()}>
            <img src={cover} alt={p.name.clone()} />
            <div class="card-body">
                <h3>{p.name.clone()}</h3>
                <p>{format!("{} • {}", p.category, p.city)}</p>
                <div class="meta">
                    <span>{format!("⭐ {}", p.rating)}</span>
                    <span>{format_inr(p.price)}</span>
                </div>

                <RouteLink to={Route::PhotographerDetail { id: p.id.clone() }} class="btn">
                    {"View Details"}
                </RouteLink>
            </div>
        </div>
    }
}
