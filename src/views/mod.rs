pub mod booking_form;
pub mod customer_bookings;
pub mod dashboard;
pub mod full_profile;
pub mod home;
pub mod login;
pub mod not_found;
pub mod photographer_bookings;
pub mod photographer_detail;
pub mod photographers;
pub mod portfolio;
pub mod profile_edit;
pub mod profile_manage;
pub mod register;
pub mod unauthorized;

pub use booking_form::BookingFormPage;
pub use customer_bookings::CustomerBookingsPage;
pub use dashboard::DashboardPage;
pub use full_profile::FullProfilePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use photographer_bookings::PhotographerBookingsPage;
pub use photographer_detail::PhotographerDetailPage;
pub use photographers::PhotographersPage;
pub use portfolio::PortfolioPage;
pub use profile_edit::ProfileEditPage;
pub use profile_manage::ProfileManagePage;
pub use register::RegisterPage;
pub use unauthorized::UnauthorizedPage;
