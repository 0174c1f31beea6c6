use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::booking::{sort_newest_first, Booking, BookingStatus};
use crate::services::booking_service;
use crate::utils::format::format_short_date;

/// Filtro activo del panel: None = todas.
type StatusFilter = Option<BookingStatus>;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| None as StatusFilter);

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
                        log::error!("❌ [DASHBOARD] No se pudo actualizar: {}", e);
                        alert("Could not update booking status");
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

    let count = |wanted: &StatusFilter| -> usize {
        match wanted {
            None => bookings.len(),
            Some(status) => bookings.iter().filter(|b| b.panel_status() == *status).count(),
        }
    };

    let filters: [(StatusFilter, &str); 4] = [
        (None, "Total Requests"),
        (Some(BookingStatus::Pending), "Pending"),
        (Some(BookingStatus::Accepted), "Accepted"),
        (Some(BookingStatus::Rejected), "Rejected"),
    ];

    html! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <h1>{"Photographer Dashboard"}</h1>
            </header>

            <section class="stats-grid">
                { for filters.iter().map(|(value, label)| {
                    let active = *filter == *value;
                    let onclick = {
                        let filter = filter.clone();
                        let value = value.clone();
                        Callback::from(move |_: MouseEvent| filter.set(value.clone()))
                    };
                    let class = classes!(
                        "stat-card",
                        value.as_ref().map(|s| s.css_class()).unwrap_or("all"),
                        active.then_some("active")
                    );
                    html! {
                        <div class={class} onclick={onclick}>
                            <div class="stat-label">{*label}</div>
                            <div class="stat-value animate-count">{count(value)}</div>
                        </div>
                    }
                }) }
            </section>

            <section class="bookings-section">
                <h2 class="section-title">{"Booking Requests"}</h2>

                if *loading {
                    <div class="loading-state">
                        <div class="loading-spinner" />
                        <p>{"Loading bookings..."}</p>
                    </div>
                } else if filtered.is_empty() {
                    <div class="empty-state">
                        <p>{"No bookings found"}</p>
                    </div>
                } else {
                    <div class="bookings-list">
                        { for filtered.iter().map(|booking| request_card(booking, &on_update_status)) }
                    </div>
                }
            </section>
        </div>
    }
}

fn request_card(booking: &Booking, on_update: &Callback<(String, BookingStatus)>) -> Html {
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

    html! {
        <div class="booking-card" key={booking.id.clone()}>
            <div class="booking-info">
                <h3>{booking.customer_display_name()}</h3>
                <p class="service">{booking.service_display()}</p>
                <time class="date">{format_short_date(&booking.booking_date)}</time>
            </div>

            <div class="booking-actions">
                if status == BookingStatus::Pending {
                    <button class="btn-accept" onclick={accept}>{"Accept"}</button>
                    <button class="btn-reject" onclick={reject}>{"Reject"}</button>
                } else {
                    <span class={classes!("status-badge", status.css_class())}>
                        {status.label()}
                    </span>
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
                log::info!("📋 [DASHBOARD] {} solicitudes", list.len());
                bookings.set(list);
            }
            Err(e) => log::error!("❌ [DASHBOARD] Error cargando reservas: {}", e),
        }
        loading.set(false);
    });
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
