//! Shortcut-hint overlay
//!
//! While the platform's primary modifier is held, the four action buttons
//! show their shortcut instead of their normal label. [`HintController`] owns
//! the state, and [`render_labels`] maps state to text.

use crate::models::{KeyInput, Platform, ThemeMode};
use crate::shortcuts::ShortcutProfile;

/// Label shown on the close button in normal state
pub const CLOSE_GLYPH: &str = "×";

/// What the action buttons currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintDisplayState {
    #[default]
    Normal,
    ShortcutHint,
}

/// The four buttons whose labels the overlay controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Theme,
    Copy,
    Clear,
    Close,
}

/// Text for each of the four action buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    pub theme: String,
    pub copy: String,
    pub clear: String,
    pub close: String,
}

impl ButtonLabels {
    #[must_use]
    pub fn get(&self, button: Button) -> &str {
        match button {
            Button::Theme => &self.theme,
            Button::Copy => &self.copy,
            Button::Clear => &self.clear,
            Button::Close => &self.close,
        }
    }
}

/// Compute the labels for a given state
#[must_use]
pub fn render_labels(
    state: HintDisplayState,
    theme: ThemeMode,
    platform: Platform,
    profile: &ShortcutProfile,
) -> ButtonLabels {
    match state {
        HintDisplayState::Normal => ButtonLabels {
            theme: theme.label().to_string(),
            copy: "Copy".to_string(),
            clear: "Clear".to_string(),
            close: CLOSE_GLYPH.to_string(),
        },
        HintDisplayState::ShortcutHint => ButtonLabels {
            theme: profile.combo(platform, profile.theme_key),
            copy: profile.combo(platform, profile.copy_key),
            clear: profile.combo(platform, profile.clear_key),
            close: profile.close_label().to_string(),
        },
    }
}

/// Two-state machine driven by modifier key-down, key-up and window blur
///
/// Each method returns the new state when a transition fired, so the caller
/// re-renders labels only on change.
#[derive(Debug, Clone, Copy)]
pub struct HintController {
    state: HintDisplayState,
    platform: Platform,
}

impl HintController {
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            state: HintDisplayState::Normal,
            platform,
        }
    }

    #[must_use]
    pub const fn state(&self) -> HintDisplayState {
        self.state
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Back to `Normal` without emitting a transition (popup reopened)
    pub fn reset(&mut self) {
        self.state = HintDisplayState::Normal;
    }

    pub fn key_down(&mut self, input: &KeyInput) -> Option<HintDisplayState> {
        if input.primary_held(self.platform) && self.state == HintDisplayState::Normal {
            tracing::debug!("Primary modifier held, showing shortcut hints");
            self.state = HintDisplayState::ShortcutHint;
            return Some(self.state);
        }
        None
    }

    pub fn key_up(&mut self, input: &KeyInput) -> Option<HintDisplayState> {
        if !input.primary_held(self.platform) {
            return self.hide();
        }
        None
    }

    pub fn blur(&mut self) -> Option<HintDisplayState> {
        self.hide()
    }

    fn hide(&mut self) -> Option<HintDisplayState> {
        if self.state == HintDisplayState::ShortcutHint {
            tracing::debug!("Hiding shortcut hints");
            self.state = HintDisplayState::Normal;
            return Some(self.state);
        }
        None
    }
}
