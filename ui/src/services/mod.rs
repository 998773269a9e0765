//! Framework-agnostic services backing the UI components

pub mod loading;
