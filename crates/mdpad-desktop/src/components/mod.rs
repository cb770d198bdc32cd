//! UI Components
//!
//! Building blocks of the popup window.

mod action_button;
mod notification_banner;

pub use action_button::ActionButton;
pub use notification_banner::NotificationBanner;
