//! Prefs module — display preferences model and durable store.

pub mod model;
pub mod store;

pub use model::{Preferences, Rgb};
pub use store::PreferencesStore;
