use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::Spinner;
use crate::models::booking::CreateBookingRequest;
use crate::models::photographer::Photographer;
use crate::router::{self, Route};
use crate::services::{booking_service, photographer_service};
use crate::utils::format::format_inr;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub id: String,
}

/// Formulario de reserva. El guard ya garantiza sesión autenticada; el
/// backend valida de nuevo con la cookie.
#[function_component(BookingFormPage)]
pub fn booking_form_page(props: &BookingFormProps) -> Html {
    let photographer = use_state(|| None::<Photographer>);
    let fetch_loading = use_state(|| true);
    let date_ref = use_node_ref();
    let note_ref = use_node_ref();
    let selected_service = use_state(|| None::<usize>);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let photographer = photographer.clone();
        let fetch_loading = fetch_loading.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match photographer_service::fetch_photographer(&id).await {
                    Ok(profile) => photographer.set(Some(profile)),
                    Err(e) => log::error!("❌ [BOOKING] Error cargando fotógrafo: {}", e),
                }
                fetch_loading.set(false);
            });
            || ()
        });
    }

    let on_select_service = {
        let selected_service = selected_service.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            selected_service.set(value.parse::<usize>().ok());
        })
    };

    let on_submit = {
        let id = props.id.clone();
        let photographer = photographer.clone();
        let date_ref = date_ref.clone();
        let note_ref = note_ref.clone();
        let selected_service = selected_service.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(p) = (*photographer).clone() else { return };
            let date = date_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let service = (*selected_service).and_then(|i| p.services.get(i).cloned());

            let Some(service) = service else {
                error.set(Some("Please select a date and service".to_string()));
                return;
            };
            if date.is_empty() {
                error.set(Some("Please select a date and service".to_string()));
                return;
            }

            let note = note_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .filter(|value| !value.trim().is_empty());

            let request = CreateBookingRequest {
                photographer_id: id.clone(),
                service_title: service.title.clone(),
                service_price: service.price,
                booking_date: date,
                note,
            };

            submitting.set(true);
            error.set(None);

            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                match booking_service::create_booking(&request).await {
                    Ok(()) => {
                        log::info!("✅ [BOOKING] Reserva enviada");
                        router::navigate(&Route::CustomerBookings);
                    }
                    Err(e) => {
                        log::error!("❌ [BOOKING] {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if *fetch_loading {
        return html! { <Spinner message="Loading booking details..." /> };
    }

    let Some(p) = (*photographer).clone() else {
        return html! {
            <div class="error-state">
                <p>{"Photographer not found"}</p>
            </div>
        };
    };

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let cover = p
        .cover_image
        .clone()
        .unwrap_or_else(|| "/placeholder.jpg".to_string());

    html! {
        <section class="booking-page">
            <div class="booking-container fade-in">
                <div class="photographer-header">
                    <div class="photographer-avatar">
                        <img src={cover} alt={p.name.clone()} />
                    </div>
                    <div class="photographer-info">
                        <h1>{format!("Book {}", p.name)}</h1>
                        <p class="location">{format!("{} • ⭐ {}", p.city, p.rating)}</p>
                    </div>
                </div>

                <form class="booking-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Preferred Date"}</label>
                        <input
                            ref={date_ref}
                            type="date"
                            min={today}
                            required={true}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Choose Service"}</label>
                        <select onchange={on_select_service} required={true}>
                            <option value="" disabled={true} selected={selected_service.is_none()}>
                                {"Select a service"}
                            </option>
                            { for p.services.iter().enumerate().map(|(index, s)| html! {
                                <option value={index.to_string()} selected={*selected_service == Some(index)}>
                                    {format!("{} ({})", s.title, format_inr(s.price))}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Note (optional)"}</label>
                        <textarea
                            ref={note_ref}
                            placeholder="Tell the photographer about your event..."
                            rows="3"
                        />
                    </div>

                    if let Some(message) = &*error {
                        <div class="error-text">{message.clone()}</div>
                    }

                    <button type="submit" class="btn primary" disabled={*submitting}>
                        {if *submitting { "Sending request..." } else { "Request Booking" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
