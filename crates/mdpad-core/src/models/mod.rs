//! Data models for mdpad

mod key;
mod notification;
mod platform;
mod theme;

pub use key::{Key, KeyInput};
pub use notification::{Notification, NotificationId, Severity};
pub use platform::Platform;
pub use theme::ThemeMode;
