//! Platform model
//!
//! Decides which physical key is the primary accelerator and how modifier
//! symbols are drawn on shortcut labels.

use serde::{Deserialize, Serialize};

/// Platform family for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS: Command is the primary modifier
    Mac,
    /// Windows, Linux and everything else: Control is the primary modifier
    Other,
}

impl Platform {
    /// Platform of the current compile target
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn is_mac(self) -> bool {
        matches!(self, Self::Mac)
    }

    /// Symbol for the primary modifier
    #[must_use]
    pub const fn primary_symbol(self) -> &'static str {
        match self {
            Self::Mac => "⌘",
            Self::Other => "Ctrl+",
        }
    }

    /// Symbol for the alt/option modifier
    #[must_use]
    pub const fn alt_symbol(self) -> &'static str {
        match self {
            Self::Mac => "⌥",
            Self::Other => "Alt+",
        }
    }

    /// Symbol for the shift modifier
    #[must_use]
    pub const fn shift_symbol(self) -> &'static str {
        match self {
            Self::Mac => "⇧",
            Self::Other => "Shift+",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_per_platform() {
        assert_eq!(Platform::Mac.primary_symbol(), "⌘");
        assert_eq!(Platform::Mac.alt_symbol(), "⌥");
        assert_eq!(Platform::Other.primary_symbol(), "Ctrl+");
        assert_eq!(Platform::Other.shift_symbol(), "Shift+");
    }

    #[test]
    fn test_current_matches_target() {
        assert_eq!(Platform::current().is_mac(), cfg!(target_os = "macos"));
    }
}
