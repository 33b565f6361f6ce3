//! Port contracts for asking the human actor.

pub mod host;

pub use host::{ConfirmationHost, ConfirmationResult};
