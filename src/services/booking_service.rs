// ============================================================================
// BOOKING SERVICE - Reservas
// ============================================================================

use serde_json::Value;

use crate::models::booking::{Booking, BookingStatus, CreateBookingRequest, StatusUpdateRequest};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn create_booking(request: &CreateBookingRequest) -> Result<(), ApiError> {
    log::info!(
        "📅 [BOOKINGS] Creando reserva con {} para {}",
        request.photographer_id,
        request.booking_date
    );
    let _: Value = ApiClient::new().post_json("/api/bookings", request).await?;
    Ok(())
}

/// Reservas del cliente autenticado.
pub async fn fetch_my_bookings() -> Result<Vec<Booking>, ApiError> {
    ApiClient::new().get_json("/api/bookings/my").await
}

/// Reservas recibidas por el fotógrafo autenticado.
pub async fn fetch_photographer_bookings() -> Result<Vec<Booking>, ApiError> {
    ApiClient::new().get_json("/api/bookings/photographer").await
}

pub async fn update_booking_status(id: &str, status: BookingStatus) -> Result<(), ApiError> {
    log::info!("🔄 [BOOKINGS] Reserva {} -> {}", id, status.label());
    let body = StatusUpdateRequest { status };
    let _: Value = ApiClient::new()
        .patch_json(&format!("/api/bookings/{}/status", id), &body)
        .await?;
    Ok(())
}
