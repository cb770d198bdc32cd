//! Single-slot notification bookkeeping
//!
//! At most one notification is visible. Showing a new one replaces the old
//! one immediately. The dismiss timer for a replaced notification must not
//! remove its successor, so dismissal is keyed by id.

use std::time::Duration;

use crate::models::{Notification, NotificationId, Severity};

/// Default time a notification stays on screen
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Tracks the currently visible notification
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }

    /// Replace any visible notification with a new one
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> Notification {
        self.next_id += 1;
        let notification = Notification {
            id: NotificationId(self.next_id),
            message: message.into(),
            severity,
        };
        self.current = Some(notification.clone());
        notification
    }

    /// Remove the notification with `id` if it is still the visible one
    ///
    /// Returns `false` when it was already replaced or dismissed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_notification_replaces_existing() {
        let mut center = NotificationCenter::new();
        let first = center.show("one", Severity::Info);
        let second = center.show("two", Severity::Error);

        assert!(second.id > first.id);
        assert_eq!(center.current(), Some(&second));
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notification() {
        let mut center = NotificationCenter::new();
        let first = center.show("one", Severity::Info);
        let second = center.show("two", Severity::Success);

        assert!(!center.dismiss(first.id));
        assert_eq!(center.current().map(|n| n.id), Some(second.id));

        assert!(center.dismiss(second.id));
        assert!(center.current().is_none());
        assert!(!center.dismiss(second.id));
    }
}
