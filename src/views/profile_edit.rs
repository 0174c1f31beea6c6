use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::photographer::{Service, UpdateProfileRequest};
use crate::services::photographer_service;
use crate::utils::format::format_inr;

/// Editor básico del perfil de fotógrafo: datos de cabecera y servicios.
#[function_component(ProfileEditPage)]
pub fn profile_edit_page() -> Html {
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    let name = use_state(String::new);
    let cover_image = use_state(String::new);
    let city = use_state(String::new);
    let experience = use_state(String::new);
    let bio = use_state(String::new);
    let available = use_state(|| true);
    let services = use_state(Vec::<Service>::new);

    let new_title_ref = use_node_ref();
    let new_price_ref = use_node_ref();
    let new_description_ref = use_node_ref();

    {
        let loading = loading.clone();
        let name = name.clone();
        let cover_image = cover_image.clone();
        let city = city.clone();
        let experience = experience.clone();
        let bio = bio.clone();
        let available = available.clone();
        let services = services.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match photographer_service::fetch_editable_profile().await {
                    Ok(profile) => {
                        name.set(profile.name);
                        cover_image.set(profile.cover_image.unwrap_or_default());
                        city.set(profile.city);
                        experience.set(profile.experience.to_string());
                        bio.set(profile.bio);
                        available.set(profile.available.unwrap_or(true));
                        services.set(profile.services);
                    }
                    Err(e) => {
                        // Primer perfil: se parte de un formulario vacío
                        log::info!("ℹ️ [PROFILE] Sin perfil previo ({})", e);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_bio = {
        let bio = bio.clone();
        Callback::from(move |e: InputEvent| {
            bio.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_toggle_available = {
        let available = available.clone();
        Callback::from(move |_: Event| available.set(!*available))
    };

    let on_add_service = {
        let services = services.clone();
        let new_title_ref = new_title_ref.clone();
        let new_price_ref = new_price_ref.clone();
        let new_description_ref = new_description_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let title = new_title_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let price = new_price_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<f64>().ok())
                .unwrap_or(0.0);
            let description = new_description_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            if title.trim().is_empty() || price <= 0.0 {
                return;
            }

            let mut next = (*services).clone();
            next.push(Service { title, price, description });
            services.set(next);

            for input_ref in [&new_title_ref, &new_price_ref, &new_description_ref] {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        })
    };

    let on_remove_service = {
        let services = services.clone();
        Callback::from(move |index: usize| {
            let mut next = (*services).clone();
            if index < next.len() {
                next.remove(index);
                services.set(next);
            }
        })
    };

    let on_submit = {
        let saving = saving.clone();
        let name = name.clone();
        let cover_image = cover_image.clone();
        let city = city.clone();
        let experience = experience.clone();
        let bio = bio.clone();
        let available = available.clone();
        let services = services.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = UpdateProfileRequest {
                name: (*name).clone(),
                cover_image: (*cover_image).clone(),
                city: (*city).clone(),
                experience: experience.parse::<u32>().unwrap_or(0),
                bio: (*bio).clone(),
                available: *available,
                services: (*services).clone(),
            };

            saving.set(true);
            let saving = saving.clone();
            spawn_local(async move {
                match photographer_service::save_profile(&request).await {
                    Ok(()) => alert("Profile updated successfully! ✅"),
                    Err(e) => {
                        log::error!("❌ [PROFILE] {}", e);
                        alert(&format!("Failed to update profile: {}", e));
                    }
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! {
            <div class="profile-container">
                <div class="skeleton-header"></div>
                <div class="skeleton-card large"></div>
                <div class="skeleton-card"></div>
            </div>
        };
    }

    let cover_preview = if cover_image.is_empty() {
        "/placeholder-cover.jpg".to_string()
    } else {
        (*cover_image).clone()
    };

    html! {
        <div class="profile-container">
            <header class="page-header">
                <h1>{"Edit Photographer Profile"}</h1>
                <p class="subtitle">{"Update your details to attract more clients"}</p>
            </header>

            <div class="cover-preview">
                <img src={cover_preview} alt="Cover preview" />
            </div>

            <form onsubmit={on_submit}>
                <section class="section">
                    <h2>{"Basic Information"}</h2>

                    <div class="form-group">
                        <label>{"Studio / Brand Name"}</label>
                        <input value={(*name).clone()} oninput={bind_input(&name)} />
                    </div>

                    <div class="form-group">
                        <label>{"Cover Image URL"}</label>
                        <input value={(*cover_image).clone()} oninput={bind_input(&cover_image)} />
                    </div>

                    <div class="form-group">
                        <label>{"City"}</label>
                        <input value={(*city).clone()} oninput={bind_input(&city)} />
                    </div>

                    <div class="form-group">
                        <label>{"Years of Experience"}</label>
                        <input
                            type="number"
                            min="0"
                            value={(*experience).clone()}
                            oninput={bind_input(&experience)}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Bio"}</label>
                        <textarea rows="4" value={(*bio).clone()} oninput={on_bio} />
                    </div>

                    <div class="form-group checkbox">
                        <label>
                            <input
                                type="checkbox"
                                checked={*available}
                                onchange={on_toggle_available}
                            />
                            {"Available for bookings"}
                        </label>
                    </div>
                </section>

                <section class="section">
                    <h2>{"Services"}</h2>

                    if services.is_empty() {
                        <p class="empty-services">{"No services added yet."}</p>
                    } else {
                        <ul class="service-list">
                            { for services.iter().enumerate().map(|(index, s)| {
                                let remove = {
                                    let on_remove_service = on_remove_service.clone();
                                    Callback::from(move |_: MouseEvent| on_remove_service.emit(index))
                                };
                                html! {
                                    <li class="service-row" key={index}>
                                        <span>{format!("{} ({})", s.title, format_inr(s.price))}</span>
                                        <button type="button" class="btn-remove" onclick={remove}>
                                            {"Remove"}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }

                    <div class="new-service">
                        <input ref={new_title_ref} placeholder="Service title" />
                        <input ref={new_price_ref} type="number" min="0" placeholder="Price" />
                        <input ref={new_description_ref} placeholder="Short description" />
                        <button type="button" class="btn" onclick={on_add_service}>
                            {"Add Service"}
                        </button>
                    </div>
                </section>

                <button type="submit" class="btn primary" disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </div>
    }
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
