use yew::prelude::*;

use crate::components::RouteLink;
use crate::hooks::session_context::use_session_context;
use crate::models::auth::Role;
use crate::router::{self, Route};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let handle = use_session_context();
    let is_photographer = handle.role() == Some(Role::Photographer);

    let on_become_photographer = Callback::from(move |_: MouseEvent| {
        // Un fotógrafo ya registrado va directo a su panel
        if is_photographer {
            router::navigate(&Route::Dashboard);
        } else {
            router::navigate(&Route::Register);
        }
    });

    html! {
        <>
            <section class="hero">
                <div class="hero-content">
                    <span class="hero-badge">{"🚀 Search for Photography"}</span>

                    <h1 class="hero-title">
                        {"Book Professional "}<span>{"Photographers"}</span>
                        <br />
                        {"Anytime, Anywhere"}
                    </h1>

                    <p class="hero-subtitle">
                        {"Find verified photographers for weddings, events, portraits and \
                          product shoots, and book instantly."}
                    </p>

                    <div class="hero-actions">
                        if is_photographer {
                            <RouteLink to={Route::Portfolio} class="btn primary">
                                {"My Portfolio"}
                            </RouteLink>
                        } else {
                            <RouteLink to={Route::Photographers} class="btn primary">
                                {"Find Photographers"}
                            </RouteLink>
                            <button onclick={on_become_photographer} class="btn secondary">
                                {"Become a Photographer"}
                            </button>
                        }
                    </div>

                    <div class="hero-stats">
                        <div>
                            <strong>{"5K+"}</strong>
                            <span>{"Photographers"}</span>
                        </div>
                        <div>
                            <strong>{"50+"}</strong>
                            <span>{"Cities"}</span>
                        </div>
                        <div>
                            <strong>{"10K+"}</strong>
                            <span>{"Bookings"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="categories">
                <h2>{"Popular Categories"}</h2>
                <div class="category-grid">
                    { for ["Wedding", "Event", "Portrait", "Product", "Baby Shoot", "Travel"]
                        .iter()
                        .map(|category| html! {
                            <RouteLink to={Route::Photographers} class="category-card">
                                {*category}
                            </RouteLink>
                        })
                    }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">{"1"}</span>
                        <h3>{"Browse"}</h3>
                        <p>{"Explore verified photographers by city and category."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"2"}</span>
                        <h3>{"Book"}</h3>
                        <p>{"Pick a date and a service that fits your budget."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"3"}</span>
                        <h3>{"Shoot"}</h3>
                        <p>{"Your photographer confirms and captures the moment."}</p>
                    </div>
                </div>
            </section>
        </>
    }
}
