pub mod loading_region;

pub use loading_region::*;
