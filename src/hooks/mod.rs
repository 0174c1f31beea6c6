pub mod session_context;
pub mod use_route;
pub mod use_session;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_route::use_route;
pub use use_session::{use_session, UseSessionHandle};
