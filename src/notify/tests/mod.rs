//! Unit tests for notification adapters.

use crate::notify::{
    adapters::{RecordingNotifier, TracingNotifier},
    domain::{Notification, NotificationLevel},
    ports::Notifier,
};
use rstest::rstest;

#[rstest]
fn recording_notifier_keeps_order_and_levels() {
    let notifier = RecordingNotifier::new();
    notifier.notify(Notification::success("New list added"));
    notifier.notify(Notification::error("List title cannot be empty"));
    notifier.notify(Notification::info("List deleted"));

    assert_eq!(
        notifier.last(),
        Some(Notification::info("List deleted"))
    );
    assert_eq!(
        notifier.messages_at(NotificationLevel::Error),
        ["List title cannot be empty"]
    );
    assert_eq!(notifier.notifications().len(), 3);
}

#[rstest]
fn recording_notifier_clones_share_history() {
    let notifier = RecordingNotifier::new();
    let observer = notifier.clone();
    notifier.notify(Notification::success("New card added"));

    assert_eq!(observer.notifications().len(), 1);
    observer.clear();
    assert!(notifier.notifications().is_empty());
}

#[rstest]
#[case(Notification::success("Board deleted"), "[success] Board deleted")]
#[case(Notification::error("Card title cannot be empty"), "[error] Card title cannot be empty")]
fn notifications_display_level_and_message(
    #[case] notification: Notification,
    #[case] expected: &str,
) {
    assert_eq!(notification.to_string(), expected);
}

#[rstest]
fn tracing_notifier_accepts_every_level() {
    let notifier: &dyn Notifier = &TracingNotifier::new();
    for level in [
        NotificationLevel::Success,
        NotificationLevel::Error,
        NotificationLevel::Info,
    ] {
        notifier.notify(Notification::new(level, "Card moved to new list"));
    }
}
