//! Storage port for the persisted board collection.

use crate::board::domain::Board;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board storage operations.
pub type BoardStorageResult<T> = Result<T, BoardStorageError>;

/// Durable home of the whole board collection, stored under one key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardStorage: Send + Sync {
    /// Loads the persisted collection.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Corrupt`] when the stored value cannot be
    /// decoded, or an I/O error from the backing store.
    async fn load(&self) -> BoardStorageResult<Option<Vec<Board>>>;

    /// Replaces the persisted collection with `boards`.
    ///
    /// # Errors
    ///
    /// Returns an encoding or I/O error from the backing store.
    async fn save(&self, boards: &[Board]) -> BoardStorageResult<()>;
}

/// Errors returned by board storage implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStorageError {
    /// The stored value is not a valid board collection.
    #[error("persisted boards are corrupt: {0}")]
    Corrupt(Arc<dyn std::error::Error + Send + Sync>),

    /// The collection could not be encoded.
    #[error("failed to encode boards: {0}")]
    Encoding(Arc<dyn std::error::Error + Send + Sync>),

    /// The backing store failed.
    #[error("storage I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),

    /// Background work could not complete.
    #[error("storage runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStorageError {
    /// Wraps a decoding error.
    pub fn corrupt(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps an encoding error.
    pub fn encoding(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Encoding(Arc::new(err))
    }

    /// Wraps an I/O error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Wraps a runtime error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
