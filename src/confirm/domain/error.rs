//! Error types for the confirmation gate.

use super::PromptId;
use thiserror::Error;

/// Errors returned by confirmation gates.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfirmationError {
    /// A prompt is already open; callers must await it before asking again.
    #[error("confirmation prompt {0} is already open")]
    AlreadyPending(PromptId),

    /// A response arrived while no prompt was open.
    #[error("no confirmation prompt is open")]
    NoPendingPrompt,

    /// A response named a prompt that is no longer the open one.
    #[error("confirmation prompt {0} is no longer open")]
    StalePrompt(PromptId),
}
