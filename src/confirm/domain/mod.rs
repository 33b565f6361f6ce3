//! Domain model for confirmation prompts.

mod error;
mod options;
mod prompt;

pub use error::ConfirmationError;
pub use options::{ConfirmKind, ConfirmOptions};
pub use prompt::{ConfirmDecision, Prompt, PromptId};
