pub mod auth;
pub mod booking;
pub mod photographer;

pub use auth::{Role, User};
pub use booking::{Booking, BookingStatus};
pub use photographer::{Photographer, PricePackage, Service};
