//! Drag-and-drop protocol.

use mockable::Clock;
use tracing::{debug, info};

use super::BoardEngine;
use crate::board::{
    domain::{CardId, DragState, DropOutcome, ListId},
    ports::BoardStorage,
    services::BoardEngineResult,
};
use crate::confirm::ports::ConfirmationHost;
use crate::notify::{domain::Notification, ports::Notifier};

impl<S, H, N, C> BoardEngine<S, H, N, C>
where
    S: BoardStorage,
    H: ConfirmationHost,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Picks up a card, entering the dragging state.
    ///
    /// A drag already in progress is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::services::BoardEngineError::CardNotFound`]
    /// when the card is not in `list_id`; the state is then left unchanged.
    pub fn begin_drag(&mut self, list_id: &ListId, card_id: &CardId) -> BoardEngineResult<()> {
        let card = self.require_card(list_id, card_id)?.clone();
        debug!(list_id = %list_id, card_id = %card_id, "drag started");
        self.drag = DragState::begin(card, list_id.clone());
        Ok(())
    }

    /// Records that the pointer entered the drop region of `list_id`.
    pub fn hover(&mut self, list_id: &ListId) {
        self.drag.hover(list_id.clone());
    }

    /// Returns the list whose drop region is highlighted.
    #[must_use]
    pub const fn hovered_list(&self) -> Option<&ListId> {
        self.drag.hovering()
    }

    /// Returns the drag protocol state.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Abandons the drag without changing the board.
    pub fn cancel_drag(&mut self) {
        if self.drag.finish().is_dragging() {
            debug!("drag cancelled");
        }
    }

    /// Releases the dragged card over `target`.
    ///
    /// The card leaves its source list and is appended to the end of
    /// `target` in one snapshot swap. Nothing changes when no card is being
    /// dragged, when `target` is the source list, when `target` does not
    /// exist, or when the card has since left its source list. The state
    /// returns to idle in every case.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::services::BoardEngineError::Store`] when the
    /// write-back fails; the move itself stays applied.
    pub async fn drop_on(&mut self, target: &ListId) -> BoardEngineResult<DropOutcome> {
        let DragState::Dragging { card, source, .. } = self.drag.finish() else {
            debug!(target_list = %target, "drop without a dragged card ignored");
            return Ok(DropOutcome::Unchanged);
        };
        if &source == target {
            debug!(card_id = %card.id(), "card dropped on its own list");
            return Ok(DropOutcome::Unchanged);
        }
        let Some(next) = self.board.with_card_moved(card.id(), &source, target) else {
            debug!(card_id = %card.id(), target_list = %target, "stale drop ignored");
            return Ok(DropOutcome::Unchanged);
        };

        info!(
            card_id = %card.id(),
            source_list = %source,
            target_list = %target,
            "card moved"
        );
        self.commit(next, Some(Notification::info("Card moved to new list")))
            .await?;
        Ok(DropOutcome::Moved)
    }
}
