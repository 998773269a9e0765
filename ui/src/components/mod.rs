//! User Interface Components
//!
//! - **display**: regions masked by a named loading indicator

pub mod display;
