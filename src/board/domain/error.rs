//! Error types for board domain validation.

use super::EntityKind;
use thiserror::Error;

/// Errors returned while constructing board values.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A required title is empty after trimming.
    #[error("{entity} title cannot be empty")]
    EmptyTitle {
        /// The kind of entity being titled.
        entity: EntityKind,
    },
}
