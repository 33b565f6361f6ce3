//! List operations.

use mockable::Clock;
use tracing::{debug, info};

use super::BoardEngine;
use crate::board::{
    domain::{BoardList, DeletionOutcome, EntityKind, ListId},
    ports::BoardStorage,
    services::{BoardEngineError, BoardEngineResult, validated_title},
};
use crate::confirm::{domain::ConfirmOptions, ports::ConfirmationHost};
use crate::notify::{domain::Notification, ports::Notifier};

impl<S, H, N, C> BoardEngine<S, H, N, C>
where
    S: BoardStorage,
    H: ConfirmationHost,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Appends an empty list after the existing lists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::Domain`] for an empty title, reported to
    /// the notifier with no state change, or [`BoardEngineError::Store`]
    /// when the write-back fails.
    pub async fn add_list(&mut self, title: impl Into<String>) -> BoardEngineResult<BoardList> {
        let list_title = validated_title(self.store.notifier(), EntityKind::List, title)?;
        let list = BoardList::new(self.store.ids().list_id(), list_title);
        let next = self.board.with_list_appended(list.clone());
        info!(board_id = %self.board.id(), list_id = %list.id(), "list added");
        self.commit(next, Some(Notification::success("New list added")))
            .await?;
        Ok(list)
    }

    /// Replaces the title of one list, keeping its position and cards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::Domain`] for an empty title,
    /// [`BoardEngineError::ListNotFound`] for an unknown list, or
    /// [`BoardEngineError::Store`] when the write-back fails.
    pub async fn rename_list(
        &mut self,
        list_id: &ListId,
        title: impl Into<String>,
    ) -> BoardEngineResult<()> {
        let list_title = validated_title(self.store.notifier(), EntityKind::List, title)?;
        let next = self
            .board
            .with_list_renamed(list_id, list_title)
            .ok_or_else(|| BoardEngineError::ListNotFound(list_id.clone()))?;
        info!(board_id = %self.board.id(), list_id = %list_id, "list renamed");
        self.commit(next, Some(Notification::success("List title updated")))
            .await
    }

    /// Deletes a list and all of its cards after the actor confirms.
    ///
    /// Closes the detail view when it shows a card from this list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::ListNotFound`] without prompting for an
    /// unknown list, [`BoardEngineError::Confirmation`] when the gate is
    /// busy, or [`BoardEngineError::Store`] when the write-back fails.
    pub async fn delete_list(&mut self, list_id: &ListId) -> BoardEngineResult<DeletionOutcome> {
        self.require_list(list_id)?;
        let confirmed = self
            .store
            .confirmer()
            .confirm(ConfirmOptions::delete_list())
            .await?;
        if !confirmed {
            debug!(list_id = %list_id, "list deletion declined");
            return Ok(DeletionOutcome::Declined);
        }

        let next = self
            .board
            .without_list(list_id)
            .ok_or_else(|| BoardEngineError::ListNotFound(list_id.clone()))?;
        info!(board_id = %self.board.id(), list_id = %list_id, "list deleted");
        self.commit(next, Some(Notification::info("List deleted")))
            .await?;
        Ok(DeletionOutcome::Deleted)
    }
}
