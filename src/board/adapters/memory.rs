//! In-memory key-value board storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::codec::{decode_boards, encode_boards};
use crate::board::{
    domain::Board,
    ports::{BoardStorage, BoardStorageError, BoardStorageResult},
};
use crate::config::DEFAULT_STORAGE_KEY;

/// Thread-safe key-value store holding the encoded collection.
///
/// Boards are kept in their persisted JSON form, exactly as a durable
/// key-value store would hold them, so every save and load goes through the
/// codec.
#[derive(Debug, Clone)]
pub struct InMemoryBoardStorage {
    key: String,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for InMemoryBoardStorage {
    fn default() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }
}

impl InMemoryBoardStorage {
    /// Creates empty storage under the default key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty storage under `key`.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates storage whose key already holds `raw`.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(storage.key.clone(), raw.into());
        }
        storage
    }

    /// Returns the key the collection is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(&self.key).cloned())
    }
}

fn poisoned(err: impl std::fmt::Display) -> BoardStorageError {
    BoardStorageError::io(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardStorage for InMemoryBoardStorage {
    async fn load(&self) -> BoardStorageResult<Option<Vec<Board>>> {
        let raw = {
            let entries = self.entries.read().map_err(poisoned)?;
            entries.get(&self.key).cloned()
        };
        raw.as_deref().map(decode_boards).transpose()
    }

    async fn save(&self, boards: &[Board]) -> BoardStorageResult<()> {
        let encoded = encode_boards(boards)?;
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(self.key.clone(), encoded);
        Ok(())
    }
}
