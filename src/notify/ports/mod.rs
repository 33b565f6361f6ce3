//! Port contracts for delivering notifications.

pub mod notifier;

pub use notifier::Notifier;
