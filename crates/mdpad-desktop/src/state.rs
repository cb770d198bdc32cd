//! Popup state and the host side of the session contract
//!
//! `PopupUi` is a bundle of signals. It is `Copy` so event handlers and
//! spawned tasks can capture it freely, and it implements [`PopupView`] so the
//! core session can drive the UI.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dioxus::desktop::window;
use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use tokio::sync::Mutex;

use mdpad_core::editor::TextBuffer;
use mdpad_core::hints::{Button, ButtonLabels};
use mdpad_core::models::{Notification, NotificationId, ThemeMode};
use mdpad_core::storage::LibSqlStore;
use mdpad_core::{PopupView, Session};

use crate::dom;
use crate::services::ArboardClipboard;

/// Session type used by the desktop popup
pub type DesktopSession = Session<LibSqlStore, ArboardClipboard>;

/// Session shared between event handlers; the mutex keeps continuations in
/// event order
pub type SharedSession = Arc<Mutex<DesktopSession>>;

/// Pulse keyframes: (scale, hold)
const PULSE_STEPS: [(f64, Duration); 3] = [
    (0.9, Duration::from_millis(100)),
    (1.05, Duration::from_millis(100)),
    (1.0, Duration::ZERO),
];

#[derive(Clone, Copy)]
pub struct PopupUi {
    pub text: Signal<String>,
    /// Last known selection in `char` offsets
    pub selection: Signal<(usize, usize)>,
    pub editor_focused: Signal<bool>,
    pub labels: Signal<ButtonLabels>,
    pub theme: Signal<ThemeMode>,
    pub notification: Signal<Option<Notification>>,
    pub scales: Signal<HashMap<Button, f64>>,
    pub session: Signal<Option<SharedSession>>,
    pub dismiss_after: Duration,
}

impl PopupUi {
    /// Scale currently applied to a button
    pub fn scale(&self, button: Button) -> f64 {
        self.scales.read().get(&button).copied().unwrap_or(1.0)
    }

    /// The session, once the store has been opened
    pub fn session(&self) -> Option<SharedSession> {
        let session = self.session.read().clone();
        if session.is_none() {
            tracing::debug!("Session not ready, dropping event");
        }
        session
    }
}

impl PopupView for PopupUi {
    fn text_buffer(&self) -> TextBuffer {
        let (selection_start, selection_end) = *self.selection.read();
        TextBuffer {
            text: self.text.read().clone(),
            selection_start,
            selection_end,
        }
    }

    fn set_text(&self, buffer: &TextBuffer) {
        let mut text = self.text;
        let mut selection = self.selection;
        text.set(buffer.text.clone());
        selection.set((buffer.selection_start, buffer.selection_end));
        dom::write_buffer(buffer);
    }

    fn focus_editor(&self) {
        dom::focus_editor();
    }

    fn set_labels(&self, labels: &ButtonLabels) {
        let mut current = self.labels;
        if *current.peek() != *labels {
            current.set(labels.clone());
        }
    }

    fn apply_theme(&self, theme: ThemeMode) {
        let mut current = self.theme;
        current.set(theme);
    }

    fn show_notification(&self, notification: &Notification) {
        let mut current = self.notification;
        current.set(Some(notification.clone()));

        let id = notification.id;
        let delay = self.dismiss_after;
        let ui = *self;
        spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(session) = ui.session() {
                session.lock().await.dismiss_notification(id, &ui);
            }
        });
    }

    fn hide_notification(&self, id: NotificationId) {
        let mut current = self.notification;
        if current.peek().as_ref().is_some_and(|n| n.id == id) {
            current.set(None);
        }
    }

    fn pulse(&self, button: Button) {
        let mut scales = self.scales;
        spawn(async move {
            for (scale, hold) in PULSE_STEPS {
                scales.write().insert(button, scale);
                if !hold.is_zero() {
                    tokio::time::sleep(hold).await;
                }
            }
        });
    }

    fn close(&self) {
        window().set_visible(false);
    }

    async fn confirm(&self, message: &str) -> bool {
        let result = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("mdpad")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;
        matches!(result, MessageDialogResult::Yes)
    }
}
