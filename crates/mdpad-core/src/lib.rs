//! mdpad-core - Core library for mdpad
//!
//! This crate contains the models, the shortcut-hint state machine, the
//! action handlers and the persistence adapter used by the mdpad popup.
//! Hosts plug in through [`session::PopupView`], [`clipboard::Clipboard`]
//! and [`storage::KeyValueStore`].

pub mod clipboard;
pub mod config;
pub mod db;
pub mod editor;
pub mod error;
pub mod hints;
pub mod messages;
pub mod models;
pub mod notify;
pub mod session;
pub mod shortcuts;
pub mod storage;
pub mod util;

pub use error::{Error, Result};
pub use models::{Key, KeyInput, Platform, ThemeMode};
pub use session::{PopupView, Session, SessionOptions};
