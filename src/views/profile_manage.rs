use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::photographer::{FullProfileUpdateRequest, PricePackage, Service};
use crate::services::photographer_service;
use crate::utils::format::format_inr;

/// Editor completo del perfil: categorías, servicios, paquetes y portfolio.
#[function_component(ProfileManagePage)]
pub fn profile_manage_page() -> Html {
    let saving = use_state(|| false);

    let name = use_state(String::new);
    let city = use_state(String::new);
    let bio = use_state(String::new);
    let experience = use_state(String::new);
    let available = use_state(|| true);

    let categories = use_state(Vec::<String>::new);
    let services = use_state(Vec::<Service>::new);
    let packages = use_state(Vec::<PricePackage>::new);
    let portfolio = use_state(Vec::<String>::new);

    let service_title_ref = use_node_ref();
    let service_price_ref = use_node_ref();
    let service_description_ref = use_node_ref();
    let package_kind_ref = use_node_ref();
    let package_amount_ref = use_node_ref();
    let package_description_ref = use_node_ref();
    let image_url_ref = use_node_ref();

    // Cargar el perfil existente, si lo hay
    {
        let name = name.clone();
        let city = city.clone();
        let bio = bio.clone();
        let experience = experience.clone();
        let available = available.clone();
        let categories = categories.clone();
        let services = services.clone();
        let packages = packages.clone();
        let portfolio = portfolio.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match photographer_service::fetch_editable_profile().await {
                    Ok(profile) => {
                        name.set(profile.name);
                        city.set(profile.city);
                        bio.set(profile.bio);
                        experience.set(profile.experience.to_string());
                        available.set(profile.available.unwrap_or(true));
                        categories.set(
                            profile.categories.into_iter().map(|c| c.name).collect(),
                        );
                        services.set(profile.services);
                        packages.set(profile.price_packages);
                        portfolio.set(profile.portfolio_images);
                    }
                    Err(e) => log::info!("ℹ️ [MANAGE] Sin perfil previo ({})", e),
                }
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

    // Categorías: se añaden con Enter, sin duplicados
    let on_category_keydown = {
        let categories = categories.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            e.prevent_default();
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value().trim().to_string();
            if !value.is_empty() && !categories.contains(&value) {
                let mut next = (*categories).clone();
                next.push(value);
                categories.set(next);
            }
            input.set_value("");
        })
    };

    let on_remove_category = {
        let categories = categories.clone();
        Callback::from(move |category: String| {
            let next: Vec<String> = categories
                .iter()
                .filter(|c| **c != category)
                .cloned()
                .collect();
            categories.set(next);
        })
    };

    let on_add_service = {
        let services = services.clone();
        let title_ref = service_title_ref.clone();
        let price_ref = service_price_ref.clone();
        let description_ref = service_description_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let title = title_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let price = price_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<f64>().ok())
                .unwrap_or(0.0);
            let description = description_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            if title.trim().is_empty() || price <= 0.0 {
                return;
            }

            let mut next = (*services).clone();
            next.push(Service { title, price, description });
            services.set(next);

            for input_ref in [&title_ref, &price_ref, &description_ref] {
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

    let on_add_package = {
        let packages = packages.clone();
        let kind_ref = package_kind_ref.clone();
        let amount_ref = package_amount_ref.clone();
        let description_ref = package_description_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let kind = kind_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_else(|| "hourly".to_string());
            let amount = amount_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<f64>().ok())
                .unwrap_or(0.0);
            let description = description_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            if amount <= 0.0 {
                return;
            }

            let mut next = (*packages).clone();
            next.push(PricePackage { kind, amount, description });
            packages.set(next);

            if let Some(input) = amount_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(input) = description_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_remove_package = {
        let packages = packages.clone();
        Callback::from(move |index: usize| {
            let mut next = (*packages).clone();
            if index < next.len() {
                next.remove(index);
                packages.set(next);
            }
        })
    };

    let on_add_image = {
        let portfolio = portfolio.clone();
        let image_url_ref = image_url_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = image_url_ref.cast::<HtmlInputElement>() else { return };
            let url = input.value().trim().to_string();
            if url.is_empty() || portfolio.contains(&url) {
                return;
            }
            let mut next = (*portfolio).clone();
            next.push(url);
            portfolio.set(next);
            input.set_value("");
        })
    };

    let on_remove_image = {
        let portfolio = portfolio.clone();
        Callback::from(move |index: usize| {
            let mut next = (*portfolio).clone();
            if index < next.len() {
                next.remove(index);
                portfolio.set(next);
            }
        })
    };

    let on_submit = {
        let saving = saving.clone();
        let name = name.clone();
        let city = city.clone();
        let bio = bio.clone();
        let experience = experience.clone();
        let available = available.clone();
        let categories = categories.clone();
        let services = services.clone();
        let packages = packages.clone();
        let portfolio = portfolio.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = FullProfileUpdateRequest {
                name: (*name).clone(),
                city: (*city).clone(),
                bio: (*bio).clone(),
                experience: experience.parse::<u32>().unwrap_or(0),
                available: *available,
                categories: (*categories).clone(),
                services: (*services).clone(),
                price_packages: (*packages).clone(),
                portfolio_images: (*portfolio).clone(),
            };

            saving.set(true);
            let saving = saving.clone();
            spawn_local(async move {
                match photographer_service::save_full_profile(&request).await {
                    Ok(()) => alert("Profile updated successfully!"),
                    Err(e) => {
                        log::error!("❌ [MANAGE] {}", e);
                        alert(&format!("Update failed: {}", e));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="manage-profile">
            <header class="page-header">
                <h1>{"Manage Your Profile"}</h1>
                <p>{"Update your photographer details, services, packages & portfolio"}</p>
            </header>

            <form class="form-grid" onsubmit={on_submit}>
                <section class="glass-card section">
                    <h2>{"Basic Information"}</h2>
                    <div class="form-group">
                        <label>{"Studio / Brand Name"}</label>
                        <input value={(*name).clone()} oninput={bind_input(&name)} />
                    </div>
                    <div class="form-group">
                        <label>{"City"}</label>
                        <input value={(*city).clone()} oninput={bind_input(&city)} />
                    </div>
                    <div class="form-group">
                        <label>{"Bio"}</label>
                        <textarea rows="4" value={(*bio).clone()} oninput={on_bio} />
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

                <section class="glass-card section">
                    <h2>{"Categories"}</h2>
                    <div class="chips">
                        { for categories.iter().map(|category| {
                            let remove = {
                                let on_remove_category = on_remove_category.clone();
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_remove_category.emit(category.clone())
                                })
                            };
                            html! {
                                <span class="chip" key={category.clone()}>
                                    {category.clone()}
                                    <button type="button" onclick={remove}>{"×"}</button>
                                </span>
                            }
                        }) }
                    </div>
                    <input
                        placeholder="Type a category and press Enter"
                        onkeydown={on_category_keydown}
                    />
                </section>

                <section class="glass-card section">
                    <h2>{"Services"}</h2>
                    { for services.iter().enumerate().map(|(index, s)| {
                        let remove = {
                            let on_remove_service = on_remove_service.clone();
                            Callback::from(move |_: MouseEvent| on_remove_service.emit(index))
                        };
                        html! {
                            <div class="service-row" key={index}>
                                <span>{format!("{} ({})", s.title, format_inr(s.price))}</span>
                                <button type="button" class="btn-remove" onclick={remove}>
                                    {"Remove"}
                                </button>
                            </div>
                        }
                    }) }
                    <div class="new-service">
                        <input ref={service_title_ref} placeholder="Service title" />
                        <input ref={service_price_ref} type="number" min="0" placeholder="Price" />
                        <input ref={service_description_ref} placeholder="Short description" />
                        <button type="button" class="btn" onclick={on_add_service}>
                            {"Add Service"}
                        </button>
                    </div>
                </section>

                <section class="glass-card section">
                    <h2>{"Price Packages"}</h2>
                    { for packages.iter().enumerate().map(|(index, pkg)| {
                        let remove = {
                            let on_remove_package = on_remove_package.clone();
                            Callback::from(move |_: MouseEvent| on_remove_package.emit(index))
                        };
                        html! {
                            <div class="package-row" key={index}>
                                <span>{format!("{} ({})", pkg.kind, format_inr(pkg.amount))}</span>
                                <button type="button" class="btn-remove" onclick={remove}>
                                    {"Remove"}
                                </button>
                            </div>
                        }
                    }) }
                    <div class="new-package">
                        <select ref={package_kind_ref}>
                            <option value="hourly">{"Hourly"}</option>
                            <option value="per-day">{"Per Day"}</option>
                            <option value="custom">{"Custom"}</option>
                        </select>
                        <input ref={package_amount_ref} type="number" min="0" placeholder="Amount" />
                        <input ref={package_description_ref} placeholder="What's included" />
                        <button type="button" class="btn" onclick={on_add_package}>
                            {"Add Package"}
                        </button>
                    </div>
                </section>

                <section class="glass-card section">
                    <h2>{"Portfolio Images"}</h2>
                    <div class="preview-grid">
                        { for portfolio.iter().enumerate().map(|(index, url)| {
                            let remove = {
                                let on_remove_image = on_remove_image.clone();
                                Callback::from(move |_: MouseEvent| on_remove_image.emit(index))
                            };
                            html! {
                                <div class="preview" key={url.clone()}>
                                    <img src={url.clone()} alt="Portfolio" />
                                    <button type="button" class="btn-remove" onclick={remove}>
                                        {"×"}
                                    </button>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="new-image">
                        <input ref={image_url_ref} placeholder="https://..." />
                        <button type="button" class="btn" onclick={on_add_image}>
                            {"Add Image"}
                        </button>
                    </div>
                </section>

                <button type="submit" class="btn primary" disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save Full Profile" }}
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
