//! Popup session: the action handlers and the hint overlay wired together.
//!
//! A [`Session`] lives for one popup opening. It owns the persistence
//! adapter, the clipboard, the hint state and the notification slot, and
//! reaches the UI only through [`PopupView`]. Store and clipboard failures
//! are logged and surfaced as an error notification; they never escape.

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::editor::TextBuffer;
use crate::hints::{render_labels, Button, ButtonLabels, HintController, HintDisplayState};
use crate::messages::Locale;
use crate::models::{KeyInput, Notification, NotificationId, Platform, Severity, ThemeMode};
use crate::notify::NotificationCenter;
use crate::shortcuts::{Action, ShortcutProfile};
use crate::storage::{EditorStore, KeyValueStore};

/// UI surface a host implements for the session
#[allow(async_fn_in_trait)]
pub trait PopupView {
    /// Current widget value and selection
    fn text_buffer(&self) -> TextBuffer;

    /// Replace the widget value and selection
    fn set_text(&self, buffer: &TextBuffer);

    fn focus_editor(&self);

    fn set_labels(&self, labels: &ButtonLabels);

    /// Apply visual styling for a theme mode
    fn apply_theme(&self, theme: ThemeMode);

    /// Show a notification, replacing any visible one
    fn show_notification(&self, notification: &Notification);

    fn hide_notification(&self, id: NotificationId);

    /// Brief scale animation on a button
    fn pulse(&self, button: Button);

    fn close(&self);

    /// Ask a yes/no question
    async fn confirm(&self, message: &str) -> bool;
}

/// Per-session behavior knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub platform: Platform,
    pub profile: ShortcutProfile,
    pub locale: Locale,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            profile: ShortcutProfile::standard(),
            locale: Locale::default(),
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            platform: config.platform(),
            profile: config.profile.clone(),
            locale: config.locale,
        }
    }
}

pub struct Session<S, C> {
    store: EditorStore<S>,
    clipboard: C,
    hints: HintController,
    profile: ShortcutProfile,
    locale: Locale,
    theme: ThemeMode,
    text: String,
    notifications: NotificationCenter,
}

impl<S: KeyValueStore, C: Clipboard> Session<S, C> {
    pub fn new(store: S, clipboard: C, options: SessionOptions) -> Self {
        Self {
            store: EditorStore::new(store),
            clipboard,
            hints: HintController::new(options.platform),
            profile: options.profile,
            locale: options.locale,
            theme: ThemeMode::default(),
            text: String::new(),
            notifications: NotificationCenter::new(),
        }
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub const fn hint_state(&self) -> HintDisplayState {
        self.hints.state()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn store(&self) -> &EditorStore<S> {
        &self.store
    }

    /// Labels for the current theme, platform and hint state
    #[must_use]
    pub fn labels(&self) -> ButtonLabels {
        render_labels(
            self.hints.state(),
            self.theme,
            self.hints.platform(),
            &self.profile,
        )
    }

    /// Popup opened: reset transient state and restore the saved text and theme
    pub async fn open(&mut self, view: &impl PopupView) {
        self.hints.reset();

        match self.store.load().await {
            Ok(saved) => {
                tracing::info!(
                    "Restored {} chars of text with {} theme",
                    saved.text.chars().count(),
                    saved.theme
                );
                self.text = saved.text;
                self.theme = saved.theme;
            }
            Err(e) => {
                tracing::error!("Failed to load saved state: {}", e);
                self.notify(view, self.locale.save_failed(), Severity::Error);
            }
        }

        let caret = self.text.chars().count();
        view.set_text(&TextBuffer::with_caret(self.text.clone(), caret));
        view.apply_theme(self.theme);
        view.set_labels(&self.labels());
        view.focus_editor();
    }

    /// The widget's value changed
    pub async fn on_input(&mut self, text: String, view: &impl PopupView) {
        self.text = text;
        self.persist_text(view).await;
    }

    /// Key pressed anywhere in the popup
    ///
    /// Returns the action performed, if any, so the host can suppress the
    /// key's default behavior.
    pub async fn key_down(
        &mut self,
        input: &KeyInput,
        editor_focused: bool,
        view: &impl PopupView,
    ) -> Option<Action> {
        self.track_modifiers(input, view);

        let action = self
            .profile
            .action_for(input, self.hints.platform(), editor_focused)?;
        tracing::debug!("Key {:?} triggered {:?}", input.key, action);
        self.perform(action, view).await;
        Some(action)
    }

    /// Hint transition for a key press, without dispatching any action
    pub fn track_modifiers(&mut self, input: &KeyInput, view: &impl PopupView) {
        if self.hints.key_down(input).is_some() {
            view.set_labels(&self.labels());
        }
    }

    pub fn key_up(&mut self, input: &KeyInput, view: &impl PopupView) {
        if self.hints.key_up(input).is_some() {
            view.set_labels(&self.labels());
        }
    }

    /// Popup window lost focus
    pub fn blur(&mut self, view: &impl PopupView) {
        if self.hints.blur().is_some() {
            view.set_labels(&self.labels());
        }
    }

    pub async fn perform(&mut self, action: Action, view: &impl PopupView) {
        match action {
            Action::Copy => self.copy(view).await,
            Action::Clear => self.clear(view).await,
            Action::ToggleTheme => self.toggle_theme(view).await,
            Action::Close => self.close(view),
            Action::Indent => self.indent(view).await,
        }
    }

    pub async fn copy(&mut self, view: &impl PopupView) {
        if self.text.trim().is_empty() {
            self.notify(view, self.locale.nothing_to_copy(), Severity::Warning);
            return;
        }

        match self.clipboard.write_text(&self.text).await {
            Ok(()) => {
                tracing::debug!("Copied {} chars to clipboard", self.text.chars().count());
                self.notify(view, self.locale.copied(), Severity::Success);
                view.pulse(Button::Copy);
            }
            Err(e) => {
                tracing::error!("Failed to copy to clipboard: {}", e);
                self.notify(view, self.locale.copy_failed(), Severity::Error);
            }
        }
    }

    /// Question to ask before clearing, if the profile wants one
    #[must_use]
    pub fn clear_prompt(&self) -> Option<&'static str> {
        (self.profile.confirm_clear && !self.text.trim().is_empty())
            .then_some(self.locale.confirm_clear())
    }

    pub async fn clear(&mut self, view: &impl PopupView) {
        if let Some(message) = self.clear_prompt() {
            if !view.confirm(message).await {
                tracing::debug!("Clear cancelled");
                return;
            }
        }
        self.clear_confirmed(view).await;
    }

    /// Clear without asking; the host has already confirmed
    pub async fn clear_confirmed(&mut self, view: &impl PopupView) {
        self.text.clear();
        view.set_text(&TextBuffer::default());
        view.focus_editor();
        if self.persist_text(view).await {
            self.notify(view, self.locale.cleared(), Severity::Info);
        }
        view.pulse(Button::Clear);
    }

    pub async fn toggle_theme(&mut self, view: &impl PopupView) {
        self.theme = self.theme.next();
        view.apply_theme(self.theme);
        view.set_labels(&self.labels());

        match self.store.save_theme(self.theme).await {
            Ok(()) => {
                tracing::info!("Theme changed to {}", self.theme);
                let message = self.locale.theme_changed(self.theme);
                self.notify(view, message, Severity::Info);
            }
            Err(e) => {
                tracing::error!("Failed to save theme: {}", e);
                self.notify(view, self.locale.save_failed(), Severity::Error);
            }
        }
        view.pulse(Button::Theme);
    }

    pub fn close(&mut self, view: &impl PopupView) {
        tracing::debug!("Closing popup");
        view.close();
    }

    /// Insert two spaces at the caret, replacing the selection
    pub async fn indent(&mut self, view: &impl PopupView) {
        let mut buffer = view.text_buffer();
        buffer.insert_indent();
        view.set_text(&buffer);
        self.text = buffer.text;
        self.persist_text(view).await;
    }

    /// Dismiss timer fired for `id`
    pub fn dismiss_notification(&mut self, id: NotificationId, view: &impl PopupView) {
        if self.notifications.dismiss(id) {
            view.hide_notification(id);
        }
    }

    #[must_use]
    pub const fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    fn notify(&mut self, view: &impl PopupView, message: impl Into<String>, severity: Severity) {
        let notification = self.notifications.show(message, severity);
        view.show_notification(&notification);
    }

    async fn persist_text(&mut self, view: &impl PopupView) -> bool {
        match self.store.save_text(&self.text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save text: {}", e);
                self.notify(view, self.locale.save_failed(), Severity::Error);
                false
            }
        }
    }
}
