use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::Spinner;
use crate::models::photographer::Photographer;
use crate::services::photographer_service;
use crate::utils::format::format_inr;

#[derive(Properties, PartialEq)]
pub struct FullProfileProps {
    pub id: String,
}

#[function_component(FullProfilePage)]
pub fn full_profile_page(props: &FullProfileProps) -> Html {
    let profile = use_state(|| None::<Photographer>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let profile = profile.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match photographer_service::fetch_full_profile(&id).await {
                    Ok(response) => profile.set(response.photographer),
                    Err(e) => {
                        log::error!("❌ [FULL-PROFILE] {}", e);
                        error.set(Some("Failed to load profile. Please try again later.".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Spinner message="Loading profile..." /> };
    }

    let Some(p) = (*profile).clone() else {
        let message = error
            .as_ref()
            .cloned()
            .unwrap_or_else(|| "Profile not found".to_string());
        return html! { <div class="error-state"><p>{message}</p></div> };
    };

    html! {
        <div class="full-profile">
            <header class="profile-hero">
                <div class="hero-content">
                    <h1 class="fade-in">{p.name.clone()}</h1>
                    <p class="tagline fade-in delay-1">
                        {format!("Professional Photographer • {}+ Years", p.experience)}
                    </p>
                </div>
            </header>

            <main class="profile-content">
                <section class="section about-section glass-card fade-in delay-2">
                    <h2>{"About"}</h2>
                    <p class="bio-text">
                        {if p.about().is_empty() {
                            "No biography available yet.".to_string()
                        } else {
                            p.about().to_string()
                        }}
                    </p>
                </section>

                <section class="section info-grid fade-in delay-3">
                    <div class="glass-card">
                        <h3>{"Experience"}</h3>
                        <p class="highlight">{format!("{}+ years", p.experience)}</p>
                    </div>

                    <div class="glass-card">
                        <h3>{"Specialties"}</h3>
                        <div class="categories">
                            if p.categories.is_empty() {
                                <span class="muted">{"Not specified"}</span>
                            } else {
                                { for p.categories.iter().map(|cat| html! {
                                    <span key={cat.id.clone()} class="category-tag">
                                        {cat.name.clone()}
                                    </span>
                                }) }
                            }
                        </div>
                    </div>
                </section>

                if !p.price_packages.is_empty() {
                    <section class="section packages-section">
                        <h2>{"Price Packages"}</h2>
                        <div class="packages-grid">
                            { for p.price_packages.iter().map(|pkg| html! {
                                <div class="package-card glass-card">
                                    <h3>{pkg.kind.clone()}</h3>
                                    <p class="price">{format_inr(pkg.amount)}</p>
                                    <p>{pkg.description.clone()}</p>
                                </div>
                            }) }
                        </div>
                    </section>
                }

                if !p.portfolio_images.is_empty() {
                    <section class="section portfolio-section">
                        <h2>{"Portfolio"}</h2>
                        <div class="portfolio-grid">
                            { for p.portfolio_images.iter().map(|url| html! {
                                <img src={url.clone()} alt="Portfolio" loading="lazy" />
                            }) }
                        </div>
                    </section>
                }
            </main>
        </div>
    }
}
