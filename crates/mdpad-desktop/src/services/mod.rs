//! Application services
//!
//! Clipboard and storage backends the popup session runs on.

mod clipboard;
mod database;

pub use clipboard::ArboardClipboard;
pub use database::open_store;
