use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::booking::{sort_newest_first, Booking, BookingStatus};
use crate::services::booking_service;
use crate::utils::format::format_booking_date;

#[function_component(PhotographerBookingsPage)]
pub fn photographer_bookings_page() -> Html {
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| None::<BookingStatus>);

    {
        let bookings = bookings.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            load_bookings(bookings, loading);
            || ()
        });
    }

    let on_update_status = {
        let bookings = bookings.clone();
        let loading = loading.clone();
        Callback::from(move |(id, status): (String, BookingStatus)| {
            let bookings = bookings.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match booking_service::update_booking_status(&id, status).await {
                    Ok(()) => load_bookings(bookings, loading),
                    Err(e) => {
                        log::error!("❌ [BOOKINGS] No se pudo actualizar: {}", e);
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message("Unable to update booking status");
                        }
                    }
                }
            });
        })
    };

    let filtered: Vec<Booking> = bookings
        .iter()
        .filter(|b| match &*filter {
            None => true,
            Some(status) => b.panel_status() == *status,
        })
        .cloned()
        .collect();

    let tabs: [(Option<BookingStatus>, &str); 4] = [
        (None, "All"),
        (Some(BookingStatus::Pending), "Pending"),
        (Some(BookingStatus::Accepted), "Accepted"),
        (Some(BookingStatus::Rejected), "Rejected"),
    ];

    let empty_label = filter
        .as_ref()
        .map(|s| s.label().to_lowercase())
        .unwrap_or_default();

    html! {
        <div class="bookings-container">
            <header class="page-header">
                <div>
                    <h1>{"Manage Bookings"}</h1>
                    <p class="subtitle">{"Review and respond to customer booking requests"}</p>
                </div>
            </header>

            <div class="filter-tabs">
                { for tabs.iter().map(|(value, label)| {
                    let active = *filter == *value;
                    let count = match value {
                        None => bookings.len(),
                        Some(status) => {
                            bookings.iter().filter(|b| b.panel_status() == *status).count()
                        }
                    };
                    let onclick = {
                        let filter = filter.clone();
                        let value = value.clone();
                        Callback::from(move |_: MouseEvent| filter.set(value.clone()))
                    };
                    html! {
                        <button class={classes!("tab", active.then_some("active"))} onclick={onclick}>
                            {*label}
                            <span class="count">{count}</span>
                        </button>
                    }
                }) }
            </div>

            if *loading {
                <div class="loading-grid">
                    { for (0..3).map(|i| html! { <div key={i} class="skeleton-card" /> }) }
                </div>
            } else if filtered.is_empty() {
                <div class="empty-state">
                    <div class="empty-icon">{"📭"}</div>
                    <h3>{format!("No {} bookings", empty_label).replace("  ", " ")}</h3>
                    <p>
                        {if filter.is_none() {
                            "You haven't received any booking requests yet.".to_string()
                        } else {
                            format!("No {} bookings at the moment.", empty_label)
                        }}
                    </p>
                </div>
            } else {
                <div class="bookings-grid">
                    { for filtered.iter().map(|b| booking_row(b, &on_update_status)) }
                </div>
            }
        </div>
    }
}

fn booking_row(booking: &Booking, on_update: &Callback<(String, BookingStatus)>) -> Html {
    let status = booking.panel_status();

    let accept = {
        let on_update = on_update.clone();
        let id = booking.id.clone();
        Callback::from(move |_: MouseEvent| on_update.emit((id.clone(), BookingStatus::Accepted)))
    };
    let reject = {
        let on_update = on_update.clone();
        let id = booking.id.clone();
        Callback::from(move |_: MouseEvent| on_update.emit((id.clone(), BookingStatus::Rejected)))
    };

    let location = booking
        .location
        .clone()
        .unwrap_or_else(|| "Not specified".to_string());

    html! {
        <div class="booking-card" key={booking.id.clone()}>
            <div class="booking-main">
                <h3 class="customer-name">{booking.customer_display_name()}</h3>
                <div class="details">
                    <span class="location">{format!("📍 {}", location)}</span>
                    <span class="date">
                        {format!("📅 {}", format_booking_date(&booking.booking_date))}
                    </span>
                </div>
            </div>

            <div class="booking-side">
                <span class={classes!("status-badge", status.css_class())}>
                    {status.label()}
                </span>

                if status == BookingStatus::Pending {
                    <div class="action-buttons">
                        <button class="btn-accept" onclick={accept}>{"Accept"}</button>
                        <button class="btn-reject" onclick={reject}>{"Reject"}</button>
                    </div>
                }
            </div>
        </div>
    }
}

fn load_bookings(bookings: UseStateHandle<Vec<Booking>>, loading: UseStateHandle<bool>) {
    spawn_local(async move {
        match booking_service::fetch_photographer_bookings().await {
            Ok(mut list) => {
                sort_newest_first(&mut list);
                bookings.set(list);
            }
            Err(e) => log::error!("❌ [BOOKINGS] Error cargando reservas: {}", e),
        }
        loading.set(false);
    });
}
