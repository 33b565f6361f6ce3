//! Working copy of the open board.
//!
//! Operations are split by concern: list CRUD in `lists`, card CRUD and
//! labels in `cards`, and the drag-and-drop protocol in `dragging`.

mod cards;
mod dragging;
mod lists;

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, warn};

use super::{BoardEngineError, BoardEngineResult, BoardStore, BoardStoreError};
use crate::board::{
    domain::{Board, BoardId, BoardList, Card, CardFocus, CardId, DragState, ListId},
    ports::BoardStorage,
};
use crate::confirm::ports::ConfirmationHost;
use crate::notify::{domain::Notification, ports::Notifier};

/// Mutation engine for a single open board.
///
/// The engine holds the authoritative copy of the board while it is open.
/// Each mutation builds a complete new snapshot and hands it to the
/// [`BoardStore`] before swapping it in, so the two copies never diverge
/// across calls. Methods take `&mut self`: there is one actor, and a pending
/// confirmation blocks every other operation on the board.
pub struct BoardEngine<S, H, N, C>
where
    S: BoardStorage,
    H: ConfirmationHost,
    N: Notifier,
    C: Clock + Send + Sync,
{
    store: Arc<BoardStore<S, H, N, C>>,
    board: Board,
    drag: DragState,
    focus: Option<CardFocus>,
}

impl<S, H, N, C> BoardEngine<S, H, N, C>
where
    S: BoardStorage,
    H: ConfirmationHost,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Selects `board_id` in the store and opens it for editing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::Store`] wrapping
    /// [`BoardStoreError::BoardNotFound`] when the board does not exist.
    pub fn open(store: Arc<BoardStore<S, H, N, C>>, board_id: &BoardId) -> BoardEngineResult<Self> {
        let board = store
            .select_board(board_id)?
            .ok_or_else(|| BoardStoreError::BoardNotFound(board_id.clone()))?;
        debug!(board_id = %board_id, lists = board.lists().len(), "board opened");
        Ok(Self {
            store,
            board,
            drag: DragState::Idle,
            focus: None,
        })
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lists of the open board in display order.
    #[must_use]
    pub fn lists(&self) -> &[BoardList] {
        self.board.lists()
    }

    /// Returns the store this engine writes back to.
    #[must_use]
    pub const fn store(&self) -> &Arc<BoardStore<S, H, N, C>> {
        &self.store
    }

    /// Shows a card in the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::CardNotFound`] when the card is not in
    /// `list_id`.
    pub fn open_card(&mut self, list_id: &ListId, card_id: &CardId) -> BoardEngineResult<&Card> {
        let card = self
            .board
            .card(list_id, card_id)
            .ok_or_else(|| card_not_found(list_id, card_id))?;
        self.focus = Some(CardFocus::new(list_id.clone(), card_id.clone()));
        Ok(card)
    }

    /// Closes the detail view.
    pub fn close_card(&mut self) {
        self.focus = None;
    }

    /// Returns which card the detail view shows.
    #[must_use]
    pub const fn focus(&self) -> Option<&CardFocus> {
        self.focus.as_ref()
    }

    /// Returns the card shown in the detail view, as it is now.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.focus
            .as_ref()
            .and_then(|focus| self.board.card(&focus.list_id, &focus.card_id))
    }

    /// Hands `next` to the store, then swaps it in and notifies.
    ///
    /// A storage write failure keeps the change, as the store does. Any other
    /// store rejection, such as the board having been deleted, leaves the
    /// engine untouched and shows nothing.
    async fn commit(
        &mut self,
        next: Board,
        notification: Option<Notification>,
    ) -> BoardEngineResult<()> {
        match self.store.update_board(next.clone()).await {
            Ok(()) => {
                self.apply(next, notification);
                Ok(())
            }
            Err(err @ BoardStoreError::Storage(_)) => {
                self.apply(next, notification);
                Err(err.into())
            }
            Err(err) => {
                warn!(board_id = %self.board.id(), error = %err, "store rejected the open board");
                Err(err.into())
            }
        }
    }

    fn apply(&mut self, next: Board, notification: Option<Notification>) {
        self.board = next;
        self.sync_focus();
        if let Some(message) = notification {
            self.store.notifier().notify(message);
        }
    }

    /// Points the detail view at wherever its card now lives, closing it
    /// when the card is gone.
    fn sync_focus(&mut self) {
        let Some(focus) = self.focus.take() else {
            return;
        };
        self.focus = self
            .board
            .locate_card(&focus.card_id)
            .map(|(list_id, _)| CardFocus::new(list_id.clone(), focus.card_id));
    }

    fn require_list(&self, list_id: &ListId) -> BoardEngineResult<&BoardList> {
        self.board
            .list(list_id)
            .ok_or_else(|| BoardEngineError::ListNotFound(list_id.clone()))
    }

    fn require_card(&self, list_id: &ListId, card_id: &CardId) -> BoardEngineResult<&Card> {
        self.require_list(list_id)?
            .card(card_id)
            .ok_or_else(|| card_not_found(list_id, card_id))
    }
}

fn card_not_found(list_id: &ListId, card_id: &CardId) -> BoardEngineError {
    BoardEngineError::CardNotFound {
        list_id: list_id.clone(),
        card_id: card_id.clone(),
    }
}
