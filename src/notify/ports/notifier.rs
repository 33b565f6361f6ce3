//! Notification delivery port.

use crate::notify::domain::Notification;

/// Fire-and-forget sink for user-facing notifications.
///
/// Implementations must not block and must not fail; a notification that
/// cannot be shown is dropped.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}
