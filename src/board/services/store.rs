//! Board collection service with write-through persistence.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::{debug, info, warn};

use super::{BoardStoreError, BoardStoreResult, validated_title};
use crate::board::{
    domain::{
        Board, BoardId, BoardList, BoardSummary, DEFAULT_LIST_TITLES, DeletionOutcome,
        EntityKind, IdGenerator, Title, sample_boards,
    },
    ports::BoardStorage,
};
use crate::confirm::{domain::ConfirmOptions, ports::ConfirmationHost};
use crate::notify::{domain::Notification, ports::Notifier};

/// Owner of the board collection and the current board selection.
///
/// Every change is written through to storage before the call returns. A
/// storage failure is reported as an error but never rolls back the
/// in-memory change that preceded it.
pub struct BoardStore<S, H, N, C>
where
    S: BoardStorage,
    H: ConfirmationHost,
    N: Notifier,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    confirmer: Arc<H>,
    notifier: Arc<N>,
    ids: IdGenerator<C>,
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    boards: Vec<Board>,
    selected: Option<BoardId>,
}

impl<S, H, N, C> BoardStore<S, H, N, C>
where
    S: BoardStorage,
    H: ConfirmationHost,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Loads the persisted collection, seeding sample boards when storage is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the persisted collection
    /// cannot be read. Failing to store the seed data is logged, not
    /// returned.
    pub async fn open(
        storage: Arc<S>,
        confirmer: Arc<H>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> BoardStoreResult<Self> {
        let boards = if let Some(loaded) = storage.load().await? {
            info!(count = loaded.len(), "loaded persisted boards");
            loaded
        } else {
            let seeded = sample_boards();
            info!(count = seeded.len(), "no persisted boards; seeding samples");
            if let Err(err) = storage.save(&seeded).await {
                warn!(error = %err, "failed to persist seeded boards");
            }
            seeded
        };

        Ok(Self {
            storage,
            confirmer,
            notifier,
            ids: IdGenerator::new(clock),
            state: RwLock::new(StoreState {
                boards,
                selected: None,
            }),
        })
    }

    /// Returns a summary of every board in order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the state lock is
    /// poisoned.
    pub fn list_boards(&self) -> BoardStoreResult<Vec<BoardSummary>> {
        Ok(self.read_state()?.boards.iter().map(Board::summary).collect())
    }

    /// Returns a snapshot of every board in order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the state lock is
    /// poisoned.
    pub fn boards(&self) -> BoardStoreResult<Vec<Board>> {
        Ok(self.read_state()?.boards.clone())
    }

    /// Finds a board without changing the selection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the state lock is
    /// poisoned.
    pub fn board(&self, board_id: &BoardId) -> BoardStoreResult<Option<Board>> {
        Ok(self
            .read_state()?
            .boards
            .iter()
            .find(|board| board.id() == board_id)
            .cloned())
    }

    /// Creates a board with the default "To Do", "In Progress", "Done"
    /// lists and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Domain`] for an empty title (also reported
    /// to the notifier) and [`BoardStoreError::Storage`] when the write
    /// fails, in which case the board has still been added.
    pub async fn create_board(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> BoardStoreResult<Board> {
        let board_title = validated_title(&*self.notifier, EntityKind::Board, title)?;
        let lists = DEFAULT_LIST_TITLES
            .iter()
            .map(|list_title| {
                Title::new(EntityKind::List, *list_title)
                    .map(|valid| BoardList::new(self.ids.list_id(), valid))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::new(self.ids.board_id(), board_title, description, lists);

        let snapshot = {
            let mut state = self.write_state()?;
            state.boards.push(board.clone());
            state.boards.clone()
        };
        info!(board_id = %board.id(), title = board.title(), "board created");
        self.notifier
            .notify(Notification::success("New board created!"));
        self.persist(&snapshot).await?;
        Ok(board)
    }

    /// Marks a board as open and returns it.
    ///
    /// Returns `None`, leaving the selection unchanged, when the board does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the state lock is
    /// poisoned.
    pub fn select_board(&self, board_id: &BoardId) -> BoardStoreResult<Option<Board>> {
        let mut state = self.write_state()?;
        let found = state
            .boards
            .iter()
            .find(|board| board.id() == board_id)
            .cloned();
        if found.is_some() {
            state.selected = Some(board_id.clone());
            debug!(board_id = %board_id, "board selected");
        } else {
            debug!(board_id = %board_id, "selection ignored for unknown board");
        }
        Ok(found)
    }

    /// Returns the open board, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the state lock is
    /// poisoned.
    pub fn selected_board(&self) -> BoardStoreResult<Option<Board>> {
        let state = self.read_state()?;
        Ok(state.selected.as_ref().and_then(|selected| {
            state
                .boards
                .iter()
                .find(|board| board.id() == selected)
                .cloned()
        }))
    }

    /// Clears the selection, returning to the board overview.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StatePoisoned`] if the state lock is
    /// poisoned.
    pub fn close_board(&self) -> BoardStoreResult<()> {
        self.write_state()?.selected = None;
        Ok(())
    }

    /// Replaces the stored board that has the same identifier as `board`.
    ///
    /// Applying the same snapshot twice leaves the same persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::BoardNotFound`] when no board has that
    /// identifier and [`BoardStoreError::Storage`] when the write fails.
    pub async fn update_board(&self, board: Board) -> BoardStoreResult<()> {
        let snapshot = {
            let mut state = self.write_state()?;
            let slot = state
                .boards
                .iter_mut()
                .find(|stored| stored.id() == board.id())
                .ok_or_else(|| BoardStoreError::BoardNotFound(board.id().clone()))?;
            *slot = board;
            state.boards.clone()
        };
        self.persist(&snapshot).await
    }

    /// Deletes a board after the actor confirms.
    ///
    /// Clears the selection when the deleted board was open. A declined
    /// prompt changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::BoardNotFound`] without prompting when the
    /// board does not exist, [`BoardStoreError::Confirmation`] when the gate
    /// is busy, and [`BoardStoreError::Storage`] when the write fails.
    pub async fn delete_board(&self, board_id: &BoardId) -> BoardStoreResult<DeletionOutcome> {
        if self.board(board_id)?.is_none() {
            return Err(BoardStoreError::BoardNotFound(board_id.clone()));
        }
        if !self.confirmer.confirm(ConfirmOptions::delete_board()).await? {
            debug!(board_id = %board_id, "board deletion declined");
            return Ok(DeletionOutcome::Declined);
        }

        let snapshot = {
            let mut state = self.write_state()?;
            state.boards.retain(|board| board.id() != board_id);
            if state.selected.as_ref() == Some(board_id) {
                state.selected = None;
            }
            state.boards.clone()
        };
        info!(board_id = %board_id, "board deleted");
        self.notifier.notify(Notification::info("Board deleted"));
        self.persist(&snapshot).await?;
        Ok(DeletionOutcome::Deleted)
    }

    pub(crate) fn confirmer(&self) -> &H {
        &self.confirmer
    }

    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }

    pub(crate) const fn ids(&self) -> &IdGenerator<C> {
        &self.ids
    }

    async fn persist(&self, boards: &[Board]) -> BoardStoreResult<()> {
        self.storage.save(boards).await.map_err(|err| {
            warn!(error = %err, "failed to persist boards; in-memory state kept");
            BoardStoreError::from(err)
        })
    }

    fn read_state(&self) -> BoardStoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_poisoned| BoardStoreError::StatePoisoned)
    }

    fn write_state(&self) -> BoardStoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_poisoned| BoardStoreError::StatePoisoned)
    }
}
