//! JSON encoding of the board collection.
//!
//! The persisted form is an array of boards, each
//! `{id, title, description, lists: [{id, title, cards: [{id, title,
//! description, labels}]}]}`. Missing `description`, `lists`, `cards`, and
//! `labels` fields decode as empty.

use crate::board::{
    domain::Board,
    ports::{BoardStorageError, BoardStorageResult},
};

/// Encodes boards as compact JSON.
///
/// # Errors
///
/// Returns [`BoardStorageError::Encoding`] if serialization fails.
pub fn encode_boards(boards: &[Board]) -> BoardStorageResult<String> {
    serde_json::to_string(boards).map_err(BoardStorageError::encoding)
}

/// Decodes a persisted board collection.
///
/// # Errors
///
/// Returns [`BoardStorageError::Corrupt`] when `raw` is not a valid
/// collection.
pub fn decode_boards(raw: &str) -> BoardStorageResult<Vec<Board>> {
    serde_json::from_str(raw).map_err(BoardStorageError::corrupt)
}
