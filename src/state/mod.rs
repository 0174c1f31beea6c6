pub mod guard;
pub mod session;

pub use guard::{evaluate, GuardOutcome, RouteAccess};
pub use session::{RoleCache, Session};
