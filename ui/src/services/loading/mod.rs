//! Named loading masks
//!
//! - **options**: indicator type, mode, strategy and color with default fallback
//! - **context**: values exposed to the region template
//! - **coordinator**: contract with the service that owns indicators by name
//! - **binding**: per-region lifecycle and until-condition handling
//! - **errors**: loading error types

pub mod binding;
pub mod context;
pub mod coordinator;
pub mod errors;
pub mod options;

#[cfg(test)]
pub(crate) mod testing;

pub use binding::*;
pub use context::*;
pub use coordinator::*;
pub use errors::*;
pub use options::*;
