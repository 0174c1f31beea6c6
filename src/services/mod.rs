pub mod api_client;
pub mod auth_service;
pub mod booking_service;
pub mod photographer_service;

pub use api_client::{ApiClient, ApiError};
