//! Main popup component

use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use dioxus::desktop::tao::event::{Event as WryEvent, WindowEvent};
use dioxus::desktop::{use_wry_event_handler, window};
use dioxus::prelude::*;
use tokio::sync::Mutex;

use mdpad_core::hints::{render_labels, Button, HintDisplayState};
use mdpad_core::shortcuts::Action;
use mdpad_core::{PopupView, Session, SessionOptions, ThemeMode};

use crate::components::{ActionButton, NotificationBanner};
use crate::dom::{self, EDITOR_ID};
use crate::keys::key_input;
use crate::services::{open_store, ArboardClipboard};
use crate::state::{PopupUi, SharedSession};
use crate::theme::resolve_theme;
use crate::{config, HOTKEY_TRIGGERED};

/// How often the reopen hotkey flag is polled
const HOTKEY_POLL: Duration = Duration::from_millis(100);

/// Run an action against the session
///
/// Clear asks for confirmation with the session unlocked, so dismiss timers
/// and key events are not held up while the dialog is open.
async fn run_action(ui: PopupUi, session: SharedSession, action: Action) {
    if action != Action::Clear {
        session.lock().await.perform(action, &ui).await;
        return;
    }

    let prompt = session.lock().await.clear_prompt();
    if let Some(message) = prompt {
        if !ui.confirm(message).await {
            tracing::debug!("Clear cancelled");
            return;
        }
    }
    session.lock().await.clear_confirmed(&ui).await;
}

/// Run an action on the session in the background
fn perform(ui: PopupUi, action: Action) {
    spawn(async move {
        if let Some(session) = ui.session() {
            run_action(ui, session, action).await;
        }
    });
}

/// Root popup component
#[component]
pub fn App() -> Element {
    let config = config();
    let ui = PopupUi {
        text: use_signal(String::new),
        selection: use_signal(|| (0, 0)),
        editor_focused: use_signal(|| false),
        labels: use_signal(|| {
            render_labels(
                HintDisplayState::Normal,
                ThemeMode::default(),
                config.platform(),
                &config.profile,
            )
        }),
        theme: use_signal(ThemeMode::default),
        notification: use_signal(|| None),
        scales: use_signal(HashMap::new),
        session: use_signal(|| None),
        dismiss_after: config.notification_delay(),
    };
    let mut initialized = use_signal(|| false);

    // Open the store and restore saved state (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);

        spawn(async move {
            match open_store(config).await {
                Ok(store) => {
                    let session = Session::new(
                        store,
                        ArboardClipboard,
                        SessionOptions::from(config),
                    );
                    let shared = Arc::new(Mutex::new(session));
                    let mut slot = ui.session;
                    slot.set(Some(shared.clone()));
                    shared.lock().await.open(&ui).await;
                }
                Err(e) => {
                    tracing::error!("Failed to open store: {}", e);
                }
            }
        });
    });

    // Reopen the popup when the global hotkey fires
    use_future(move || async move {
        loop {
            if HOTKEY_TRIGGERED.swap(false, Ordering::SeqCst) {
                tracing::info!("Reopening popup from hotkey");
                window().set_visible(true);
                window().set_focus();
                if let Some(session) = ui.session() {
                    session.lock().await.open(&ui).await;
                }
            }
            tokio::time::sleep(HOTKEY_POLL).await;
        }
    });

    // Losing window focus hides shortcut hints
    use_wry_event_handler(move |event, _| {
        if let WryEvent::WindowEvent {
            event: WindowEvent::Focused(false),
            ..
        } = event
        {
            spawn(async move {
                if let Some(session) = ui.session() {
                    session.lock().await.blur(&ui);
                }
            });
        }
    });

    let on_keydown = move |evt: Event<KeyboardData>| {
        let input = key_input(&evt);
        let focused = *ui.editor_focused.peek();
        let action = config
            .profile
            .action_for(&input, config.platform(), focused);
        if action.is_some() {
            evt.prevent_default();
        }

        spawn(async move {
            let Some(session) = ui.session() else {
                return;
            };
            match action {
                Some(Action::Clear) => {
                    session.lock().await.track_modifiers(&input, &ui);
                    run_action(ui, session, Action::Clear).await;
                }
                Some(Action::Indent) => {
                    match dom::read_selection().await {
                        Ok(range) => {
                            let mut selection = ui.selection;
                            selection.set(range);
                        }
                        Err(e) => tracing::warn!("{}", e),
                    }
                    session.lock().await.key_down(&input, focused, &ui).await;
                }
                _ => {
                    session.lock().await.key_down(&input, focused, &ui).await;
                }
            }
        });
    };

    let on_keyup = move |evt: Event<KeyboardData>| {
        let input = key_input(&evt);
        spawn(async move {
            if let Some(session) = ui.session() {
                session.lock().await.key_up(&input, &ui);
            }
        });
    };

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        let mut text = ui.text;
        text.set(value.clone());
        spawn(async move {
            if let Some(session) = ui.session() {
                session.lock().await.on_input(value, &ui).await;
            }
        });
    };

    let mode = (ui.theme)();
    let resolved = resolve_theme(mode);
    let colors = resolved.palette();
    let theme_attr = resolved.as_str();
    let theme_class = mode.css_class().unwrap_or("auto-theme");
    let labels = (ui.labels)();
    let text = (ui.text)();

    rsx! {
        div {
            class: "popup {theme_class}",
            "data-theme": "{theme_attr}",
            style: "
                width: 100vw;
                height: 100vh;
                box-sizing: border-box;
                padding: 10px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            onkeydown: on_keydown,
            onkeyup: on_keyup,

            div {
                class: "toolbar",
                style: "display: flex; gap: 6px; align-items: center;",

                ActionButton {
                    label: labels.theme.clone(),
                    title: "Theme",
                    scale: ui.scale(Button::Theme),
                    colors,
                    onclick: move |_| perform(ui, Action::ToggleTheme),
                }
                ActionButton {
                    label: labels.copy.clone(),
                    title: "Copy",
                    scale: ui.scale(Button::Copy),
                    colors,
                    onclick: move |_| perform(ui, Action::Copy),
                }
                ActionButton {
                    label: labels.clear.clone(),
                    title: "Clear",
                    scale: ui.scale(Button::Clear),
                    colors,
                    onclick: move |_| perform(ui, Action::Clear),
                }

                div { style: "flex: 1;" }

                ActionButton {
                    label: labels.close.clone(),
                    title: "Close",
                    scale: ui.scale(Button::Close),
                    colors,
                    onclick: move |_| perform(ui, Action::Close),
                }
            }

            textarea {
                id: EDITOR_ID,
                style: "
                    flex: 1;
                    width: 100%;
                    box-sizing: border-box;
                    resize: none;
                    outline: none;
                    padding: 10px;
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    font-family: ui-monospace, Menlo, Consolas, monospace;
                    font-size: 13px;
                    background: {colors.bg_secondary};
                    color: {colors.text_primary};
                    caret-color: {colors.accent};
                ",
                value: "{text}",
                placeholder: "Markdown...",
                spellcheck: false,
                autofocus: true,
                oninput: on_input,
                onfocus: move |_| {
                    let mut focused = ui.editor_focused;
                    focused.set(true);
                },
                onblur: move |_| {
                    let mut focused = ui.editor_focused;
                    focused.set(false);
                },
            }

            if let Some(notification) = (ui.notification)() {
                NotificationBanner { notification }
            }
        }
    }
}
