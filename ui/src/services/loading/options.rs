//! Loading mask configuration
//!
//! Attribute values arrive as loose strings. Each option enum accepts only its
//! exact lowercase spelling and falls back to its default for anything else,
//! so an unknown value never produces an error.

use serde::{Deserialize, Serialize};

/// Shape of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum LoadingType {
    Linear,
    #[default]
    Circular,
}

impl LoadingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingType::Linear => "linear",
            LoadingType::Circular => "circular",
        }
    }
}

impl From<&str> for LoadingType {
    fn from(value: &str) -> Self {
        match value {
            "linear" => LoadingType::Linear,
            _ => LoadingType::Circular,
        }
    }
}

/// Whether the indicator shows progress or just spins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum LoadingMode {
    Determinate,
    #[default]
    Indeterminate,
}

impl LoadingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingMode::Determinate => "determinate",
            LoadingMode::Indeterminate => "indeterminate",
        }
    }
}

impl From<&str> for LoadingMode {
    fn from(value: &str) -> Self {
        match value {
            "determinate" => LoadingMode::Determinate,
            _ => LoadingMode::Indeterminate,
        }
    }
}

/// How the indicator relates to the host content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum LoadingStrategy {
    /// Host content is swapped out while loading
    #[default]
    Replace,
    /// Indicator is drawn on top of the host content
    Overlay,
}

impl LoadingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingStrategy::Replace => "replace",
            LoadingStrategy::Overlay => "overlay",
        }
    }
}

impl From<&str> for LoadingStrategy {
    fn from(value: &str) -> Self {
        match value {
            "overlay" => LoadingStrategy::Overlay,
            _ => LoadingStrategy::Replace,
        }
    }
}

/// Theme palette used by the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum LoadingColor {
    #[default]
    Primary,
    Accent,
    Warn,
}

impl LoadingColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingColor::Primary => "primary",
            LoadingColor::Accent => "accent",
            LoadingColor::Warn => "warn",
        }
    }
}

impl From<&str> for LoadingColor {
    fn from(value: &str) -> Self {
        match value {
            "accent" => LoadingColor::Accent,
            "warn" => LoadingColor::Warn,
            _ => LoadingColor::Primary,
        }
    }
}

macro_rules! impl_from_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self::from(value.as_str())
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_from_string!(LoadingType, LoadingMode, LoadingStrategy, LoadingColor);

/// Configuration bundle handed to the coordinator when an indicator is created
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Registry name of the indicator
    pub name: String,

    #[serde(rename = "type", default)]
    pub loading_type: LoadingType,

    #[serde(default)]
    pub mode: LoadingMode,

    #[serde(default)]
    pub strategy: LoadingStrategy,

    #[serde(default)]
    pub color: LoadingColor,
}

impl LoadingConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
