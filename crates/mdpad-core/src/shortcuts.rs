//! Keyboard shortcut profiles and key dispatch
//!
//! A profile fixes the secondary modifier, the letter per action, how the
//! popup is closed from the keyboard, and whether Clear asks first.

use serde::{Deserialize, Serialize};

use crate::models::{Key, KeyInput, Platform};

/// An action the popup can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Copy,
    Clear,
    ToggleTheme,
    Close,
    Indent,
}

/// Modifier combined with the primary modifier in action shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecondaryModifier {
    #[default]
    Alt,
    Shift,
}

impl SecondaryModifier {
    #[must_use]
    pub const fn symbol(self, platform: Platform) -> &'static str {
        match self {
            Self::Alt => platform.alt_symbol(),
            Self::Shift => platform.shift_symbol(),
        }
    }

    fn held(self, input: &KeyInput) -> bool {
        match self {
            Self::Alt => input.alt_held(),
            Self::Shift => input.shift_held(),
        }
    }
}

/// Keyboard binding that closes the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CloseBinding {
    /// Escape alone
    #[default]
    Escape,
    /// Primary modifier + Escape
    PrimaryEscape,
}

/// A complete set of shortcut bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShortcutProfile {
    pub secondary: SecondaryModifier,
    pub copy_key: char,
    pub clear_key: char,
    pub theme_key: char,
    pub close: CloseBinding,
    /// Ask before clearing non-blank text
    pub confirm_clear: bool,
}

impl Default for ShortcutProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShortcutProfile {
    /// Mod+Alt+C copy, Mod+Alt+E clear (erase), Mod+Alt+T theme, Esc close,
    /// confirmation before clearing
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            secondary: SecondaryModifier::Alt,
            copy_key: 'c',
            clear_key: 'e',
            theme_key: 't',
            close: CloseBinding::Escape,
            confirm_clear: true,
        }
    }

    /// Resolve the action a key-down triggers, if any
    ///
    /// `editor_focused` gates Tab indentation, which only applies inside the
    /// text widget. Action shortcuts accept either meta or ctrl so a
    /// Windows keyboard on a Mac still works.
    #[must_use]
    pub fn action_for(
        &self,
        input: &KeyInput,
        platform: Platform,
        editor_focused: bool,
    ) -> Option<Action> {
        match input.key {
            Key::Escape => match self.close {
                CloseBinding::Escape => Some(Action::Close),
                CloseBinding::PrimaryEscape => {
                    input.primary_held(platform).then_some(Action::Close)
                }
            },
            Key::Tab => editor_focused.then_some(Action::Indent),
            Key::Character(c) => {
                if !input.any_accelerator_held() || !self.secondary.held(input) {
                    return None;
                }
                let c = c.to_ascii_lowercase();
                if c == self.copy_key.to_ascii_lowercase() {
                    Some(Action::Copy)
                } else if c == self.clear_key.to_ascii_lowercase() {
                    Some(Action::Clear)
                } else if c == self.theme_key.to_ascii_lowercase() {
                    Some(Action::ToggleTheme)
                } else {
                    None
                }
            }
            Key::Other => None,
        }
    }

    /// Shortcut text for an action letter, e.g. `⌘⌥C` or `Ctrl+Alt+C`
    #[must_use]
    pub fn combo(&self, platform: Platform, letter: char) -> String {
        format!(
            "{}{}{}",
            platform.primary_symbol(),
            self.secondary.symbol(platform),
            letter.to_ascii_uppercase()
        )
    }

    /// Label shown for the close shortcut
    #[must_use]
    pub const fn close_label(&self) -> &'static str {
        "ESC"
    }
}
