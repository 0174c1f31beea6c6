use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::RouteLink;
use crate::models::booking::Booking;
use crate::router::Route;
use crate::services::api_client::ApiError;
use crate::services::booking_service;
use crate::utils::format::{format_booking_date, format_inr};

#[function_component(CustomerBookingsPage)]
pub fn customer_bookings_page() -> Html {
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let bookings = bookings.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match booking_service::fetch_my_bookings().await {
                    Ok(list) => {
                        log::info!("📋 [MY-BOOKINGS] {} reservas", list.len());
                        bookings.set(list);
                    }
                    // Un 401 ya redirigió desde el api client; el resto se pinta
                    Err(ApiError::SessionExpired) => {}
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="bookings-container">
            <div class="page-header">
                <h1>{"My Bookings"}</h1>
                <p class="subtitle">
                    {"Track and manage all your photography bookings in one place"}
                </p>
            </div>

            if *loading {
                <div class="loading-grid">
                    { for (0..3).map(|i| html! {
                        <div key={i} class="skeleton-card">
                            <div class="skeleton-image"></div>
                            <div class="skeleton-lines">
                                <div class="skeleton-line long"></div>
                                <div class="skeleton-line short"></div>
                            </div>
                        </div>
                    }) }
                </div>
            } else if let Some(message) = &*error {
                <div class="error-state"><p>{message.clone()}</p></div>
            } else if bookings.is_empty() {
                <div class="empty-state">
                    <div class="empty-illustration">{"📸"}</div>
                    <h3>{"No bookings yet"}</h3>
                    <p>{"Start your journey by booking a talented photographer today!"}</p>
                    <RouteLink to={Route::Photographers} class="primary-btn">
                        {"Browse Photographers"}
                    </RouteLink>
                </div>
            } else {
                <div class="bookings-grid">
                    { for bookings.iter().map(booking_card) }
                </div>
            }
        </div>
    }
}

fn booking_card(booking: &Booking) -> Html {
    let photographer_name = booking
        .photographer
        .as_ref()
        .map(|p| p.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Unknown Photographer".to_string());

    let city = booking
        .photographer
        .as_ref()
        .map(|p| p.city.clone())
        .filter(|city| !city.is_empty())
        .unwrap_or_else(|| "Location not specified".to_string());

    let cover = booking
        .photographer
        .as_ref()
        .and_then(|p| p.cover_image.clone())
        .unwrap_or_else(|| "/placeholder.jpg".to_string());

    let status = &booking.status;

    html! {
        <div class="booking-card" key={booking.id.clone()}>
            <div class="cover-image-wrapper">
                <img src={cover} alt={photographer_name.clone()} class="cover-image" />
                <div class="cover-overlay">
                    <div class="photographer-info">
                        <h3>{photographer_name}</h3>
                        <p class="city">{format!("📍 {}", city)}</p>
                    </div>
                    <div class={classes!("status-badge", status.css_class())}>
                        <span class="icon">{status.icon()}</span>
                        {status.label()}
                    </div>
                </div>
            </div>

            <div class="booking-details">
                <div class="detail-row">
                    <span class="label">{"Service"}</span>
                    <span class="value">{booking.service_display()}</span>
                </div>
                <div class="detail-row">
                    <span class="label">{"Amount"}</span>
                    <span class="value price">
                        {format_inr(booking.service_price.unwrap_or(0.0))}
                    </span>
                </div>
                <div class="detail-row">
                    <span class="label">{"Booking Date"}</span>
                    <span class="value">{format_booking_date(&booking.booking_date)}</span>
                </div>
                if let Some(note) = &booking.note {
                    <div class="detail-row note-row">
                        <span class="label">{"Your Note"}</span>
                        <span class="value note">{format!("\"{}\"", note)}</span>
                    </div>
                }
            </div>
        </div>
    }
}
