//! Notification adapters.

pub mod logging;
pub mod memory;

pub use logging::TracingNotifier;
pub use memory::RecordingNotifier;
