//! Notifier that forwards notifications to `tracing`.

use crate::notify::{
    domain::{Notification, NotificationLevel},
    ports::Notifier,
};
use tracing::{info, warn};

/// Writes every notification as a structured log event.
///
/// Errors are logged at `WARN`; success and info notifications at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a tracing notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let level = notification.level();
        match level {
            NotificationLevel::Error => {
                warn!(level = level.as_str(), text = notification.message(), "notification");
            }
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(level = level.as_str(), text = notification.message(), "notification");
            }
        }
    }
}
