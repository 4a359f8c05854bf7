//! Settings module
//!
//! The user's preferences, stored as a single document.

mod model;
mod store;

pub use model::*;
pub use store::{SettingsRepository, SettingsStore};
