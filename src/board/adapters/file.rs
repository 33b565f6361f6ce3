//! File-backed board storage.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use super::codec::{decode_boards, encode_boards};
use crate::board::{
    domain::Board,
    ports::{BoardStorage, BoardStorageError, BoardStorageResult},
};
use crate::config::TaskflowConfig;

/// Stores the collection as `<key>.json` inside a data directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// previous snapshot, so readers see either the old or the new collection.
#[derive(Debug, Clone)]
pub struct FileBoardStorage {
    dir: Arc<Dir>,
    file_name: String,
    temp_name: String,
}

impl FileBoardStorage {
    /// Opens storage in `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(data_dir: &Utf8Path, key: &str) -> BoardStorageResult<Self> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority()).map_err(BoardStorageError::io)?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())
            .map_err(BoardStorageError::io)?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: format!("{key}.json"),
            temp_name: format!("{key}.json.tmp"),
        })
    }

    /// Opens storage at the configured data directory and key.
    ///
    /// # Errors
    ///
    /// See [`FileBoardStorage::open`].
    pub fn from_config(config: &TaskflowConfig) -> BoardStorageResult<Self> {
        Self::open(config.data_dir(), config.storage_key())
    }

    /// Returns the snapshot file name within the data directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Runs blocking filesystem work off the async executor.
async fn run_blocking<F, T>(work: F) -> BoardStorageResult<T>
where
    F: FnOnce() -> BoardStorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(BoardStorageError::runtime)?
}

#[async_trait]
impl BoardStorage for FileBoardStorage {
    async fn load(&self) -> BoardStorageResult<Option<Vec<Board>>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(raw) => decode_boards(&raw).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %file_name, "no persisted boards");
                Ok(None)
            }
            Err(err) => Err(BoardStorageError::io(err)),
        })
        .await
    }

    async fn save(&self, boards: &[Board]) -> BoardStorageResult<()> {
        let encoded = encode_boards(boards)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_name.clone();
        run_blocking(move || {
            dir.write(&temp_name, encoded.as_bytes())
                .map_err(BoardStorageError::io)?;
            dir.rename(&temp_name, &dir, &file_name)
                .map_err(BoardStorageError::io)
        })
        .await
    }
}
