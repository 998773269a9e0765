//! Named loading masks for Dioxus UIs.
//!
//! A [`components::display::LoadingRegion`] registers itself by name with a
//! shared [`services::loading::LoadingCoordinator`], so code that never sees
//! the region (an HTTP layer, a background task) can register and resolve
//! loads on it by name.

pub mod components;
pub mod services;

pub use components::display::LoadingRegion;
pub use services::loading::{LoadingCoordinator, LoadingError};
