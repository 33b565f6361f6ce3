//! Service-level errors for board operations.

use crate::board::{
    domain::{BoardDomainError, BoardId, CardId, ListId},
    ports::BoardStorageError,
};
use crate::confirm::domain::ConfirmationError;
use thiserror::Error;

/// Errors returned by [`super::BoardStore`].
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Storage failed. In-memory changes made before the failure stay applied.
    #[error(transparent)]
    Storage(#[from] BoardStorageError),
    /// The confirmation gate rejected the request.
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
    /// No board exists with the given identifier.
    #[error("board {0} not found")]
    BoardNotFound(BoardId),
    /// The in-memory collection lock was poisoned.
    #[error("board collection state is poisoned")]
    StatePoisoned,
}

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Errors returned by [`super::BoardEngine`].
#[derive(Debug, Error)]
pub enum BoardEngineError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Handing the board back to the store failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// The confirmation gate rejected the request.
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
    /// No list exists with the given identifier on the open board.
    #[error("list {0} not found")]
    ListNotFound(ListId),
    /// The card is not in the given list.
    #[error("card {card_id} not found in list {list_id}")]
    CardNotFound {
        /// List that was searched.
        list_id: ListId,
        /// Missing card.
        card_id: CardId,
    },
}

/// Result type for board engine operations.
pub type BoardEngineResult<T> = Result<T, BoardEngineError>;
