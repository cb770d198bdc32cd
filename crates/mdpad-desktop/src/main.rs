//! mdpad Desktop Application
//!
//! A popup scratch editor with copy, clear, theme and shortcut hints.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod dom;
mod hotkey;
mod keys;
mod services;
mod state;
mod theme;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder, WindowCloseBehaviour};
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use hotkey::HotkeyManager;
use mdpad_core::config::Config;

/// Atomic flag for hotkey events - shared between event handler and UI
pub static HOTKEY_TRIGGERED: AtomicBool = AtomicBool::new(false);

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Configuration loaded at startup
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mdpad=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting mdpad...");

    let loaded = Config::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });
    let _ = CONFIG.set(loaded);

    // The manager must be kept alive and stay on the main thread
    let _hotkey_manager = match HotkeyManager::new() {
        Ok(manager) => {
            GlobalHotKeyEvent::set_event_handler(Some(|event: GlobalHotKeyEvent| {
                if event.state == HotKeyState::Pressed {
                    tracing::debug!("Reopen hotkey pressed");
                    HOTKEY_TRIGGERED.store(true, Ordering::SeqCst);
                }
            }));
            Some(manager)
        }
        Err(e) => {
            tracing::error!("Failed to register hotkey: {}", e);
            None
        }
    };

    // Closing hides the popup; the hotkey brings it back
    let cfg = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title("mdpad")
                .with_inner_size(LogicalSize::new(360.0, 420.0))
                .with_resizable(false)
                .with_always_on_top(true)
                .with_focused(true),
        )
        .with_close_behaviour(WindowCloseBehaviour::WindowHides);

    dioxus::LaunchBuilder::new().with_cfg(cfg).launch(app::App);
}
