//! Confirmation host port.

use crate::confirm::domain::{ConfirmOptions, ConfirmationError};
use async_trait::async_trait;

/// Result type for confirmation requests.
pub type ConfirmationResult<T> = Result<T, ConfirmationError>;

/// Asks the human actor a yes/no question.
#[async_trait]
pub trait ConfirmationHost: Send + Sync {
    /// Shows a prompt and waits, without a timeout, for the answer.
    ///
    /// Resolves to `true` when the actor confirms and `false` when they
    /// cancel or dismiss the prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::AlreadyPending`] when another prompt is
    /// still open on a single-slot host.
    async fn confirm(&self, options: ConfirmOptions) -> ConfirmationResult<bool>;
}
