// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use storage::{load_from_storage, remove_from_storage, save_to_storage, LocalRoleCache};
