//! Theme mode model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Theme mode options
///
/// Stored as its lowercase name. The toggle cycle is Auto → Light → Dark → Auto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow system preference
    #[default]
    Auto,
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// All modes in cycle order
    pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

    /// The mode that follows this one in the toggle cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }

    /// Stored name ("auto", "light", "dark")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Capitalized name shown on the theme button
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// CSS class applied to the popup body, `None` for Auto
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Light => Some("light-theme"),
            Self::Dark => Some("dark-theme"),
        }
    }

    /// Parse a stored value, falling back to Auto for anything unrecognized
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::InvalidInput(format!("unknown theme mode: {other}"))),
        }
    }
}
