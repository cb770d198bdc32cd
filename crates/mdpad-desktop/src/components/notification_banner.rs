//! Transient notification banner

use dioxus::prelude::*;
use mdpad_core::models::{Notification, Severity};

const fn background(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "rgba(52, 199, 89, 0.9)",
        Severity::Error => "rgba(255, 59, 48, 0.9)",
        Severity::Warning => "rgba(255, 149, 0, 0.9)",
        Severity::Info => "rgba(0, 122, 255, 0.9)",
    }
}

/// Fixed banner in the top-right corner; one at a time
#[component]
pub fn NotificationBanner(notification: Notification) -> Element {
    let bg = background(notification.severity);
    let severity = notification.severity.as_str();

    rsx! {
        div {
            key: "{notification.id}",
            class: "notification notification-{severity}",
            style: "
                position: fixed;
                top: 10px;
                right: 10px;
                padding: 8px 16px;
                border-radius: 6px;
                font-size: 12px;
                font-weight: 500;
                z-index: 1000;
                pointer-events: none;
                background: {bg};
                color: white;
            ",
            "{notification.message}"
        }
    }
}
