//! Card and label operations.

use mockable::Clock;
use tracing::{debug, info};

use super::{BoardEngine, card_not_found};
use crate::board::{
    domain::{Card, CardId, DeletionOutcome, EntityKind, ListId},
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
    /// Appends a new card with no labels to the end of `list_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::Domain`] for an empty title, reported to
    /// the notifier with no state change, [`BoardEngineError::ListNotFound`]
    /// for an unknown list, or [`BoardEngineError::Store`] when the
    /// write-back fails.
    pub async fn add_card(
        &mut self,
        list_id: &ListId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> BoardEngineResult<Card> {
        let card_title = validated_title(self.store.notifier(), EntityKind::Card, title)?;
        let card = Card::new(self.store.ids().card_id(), card_title, description);
        let next = self
            .board
            .with_card_appended(list_id, card.clone())
            .ok_or_else(|| BoardEngineError::ListNotFound(list_id.clone()))?;
        info!(list_id = %list_id, card_id = %card.id(), "card added");
        self.commit(next, Some(Notification::success("New card added")))
            .await?;
        Ok(card)
    }

    /// Deletes a card after the actor confirms.
    ///
    /// Closes the detail view when it shows this card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::CardNotFound`] without prompting when the
    /// card is not in `list_id`, [`BoardEngineError::Confirmation`] when the
    /// gate is busy, or [`BoardEngineError::Store`] when the write-back
    /// fails.
    pub async fn delete_card(
        &mut self,
        list_id: &ListId,
        card_id: &CardId,
    ) -> BoardEngineResult<DeletionOutcome> {
        self.require_card(list_id, card_id)?;
        let confirmed = self
            .store
            .confirmer()
            .confirm(ConfirmOptions::delete_card())
            .await?;
        if !confirmed {
            debug!(list_id = %list_id, card_id = %card_id, "card deletion declined");
            return Ok(DeletionOutcome::Declined);
        }

        let next = self
            .board
            .without_card(list_id, card_id)
            .ok_or_else(|| card_not_found(list_id, card_id))?;
        info!(list_id = %list_id, card_id = %card_id, "card deleted");
        self.commit(next, Some(Notification::info("Card deleted")))
            .await?;
        Ok(DeletionOutcome::Deleted)
    }

    /// Appends a label to a card. Blank text is ignored.
    ///
    /// Labels are stored verbatim; duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::CardNotFound`] when the card is not in
    /// `list_id`, or [`BoardEngineError::Store`] when the write-back fails.
    pub async fn add_label(
        &mut self,
        list_id: &ListId,
        card_id: &CardId,
        text: &str,
    ) -> BoardEngineResult<()> {
        if text.trim().is_empty() {
            debug!(card_id = %card_id, "blank label ignored");
            return Ok(());
        }
        let next = self
            .board
            .with_label_added(list_id, card_id, text)
            .ok_or_else(|| card_not_found(list_id, card_id))?;
        debug!(card_id = %card_id, label = text, "label added");
        self.commit(next, None).await
    }
}
