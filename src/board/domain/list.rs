//! Ordered lists of cards.

use super::{Card, CardId, ListId, Title};
use serde::{Deserialize, Serialize};

/// A named, ordered column of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    id: ListId,
    title: String,
    #[serde(default)]
    cards: Vec<Card>,
}

impl BoardList {
    /// Creates an empty list.
    #[must_use]
    pub fn new(id: ListId, title: Title) -> Self {
        Self {
            id,
            title: title.into_inner(),
            cards: Vec::new(),
        }
    }

    /// Reconstructs a list from stored fields without validation.
    #[must_use]
    pub fn from_parts(id: ListId, title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id,
            title: title.into(),
            cards,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> &ListId {
        &self.id
    }

    /// Returns the list title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Finds a card in this list.
    #[must_use]
    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == card_id)
    }

    /// Returns a copy with a new title; cards are unchanged.
    #[must_use]
    pub fn with_title(&self, title: Title) -> Self {
        Self {
            id: self.id.clone(),
            title: title.into_inner(),
            cards: self.cards.clone(),
        }
    }

    /// Returns a copy with `card` appended at the end.
    #[must_use]
    pub fn with_card_appended(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.push(card);
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards,
        }
    }

    /// Returns a copy without the card `card_id`.
    #[must_use]
    pub fn without_card(&self, card_id: &CardId) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards: self
                .cards
                .iter()
                .filter(|card| card.id() != card_id)
                .cloned()
                .collect(),
        }
    }

    /// Returns a copy where `card_id` is replaced by `update(card)`, or
    /// `None` when the card is not in this list.
    #[must_use]
    pub fn with_card_updated(
        &self,
        card_id: &CardId,
        update: impl FnOnce(&Card) -> Card,
    ) -> Option<Self> {
        let position = self.cards.iter().position(|card| card.id() == card_id)?;
        let mut cards = self.cards.clone();
        let slot = cards.get_mut(position)?;
        *slot = update(&*slot);
        Some(Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards,
        })
    }
}
