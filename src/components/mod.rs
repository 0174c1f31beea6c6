pub mod auth_card;
pub mod footer;
pub mod navbar;
pub mod protected_route;
pub mod route_link;
pub mod search_bar;
pub mod spinner;

pub use auth_card::AuthCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use protected_route::ProtectedRoute;
pub use route_link::RouteLink;
pub use search_bar::SearchBar;
pub use spinner::Spinner;
