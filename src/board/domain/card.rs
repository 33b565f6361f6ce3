//! Cards and the card detail focus.

use super::{CardId, LabelColor, ListId, Title};
use serde::{Deserialize, Serialize};

/// A task item that moves between lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    labels: Vec<String>,
}

impl Card {
    /// Creates a card with no labels.
    #[must_use]
    pub fn new(id: CardId, title: Title, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into_inner(),
            description: description.into(),
            labels: Vec::new(),
        }
    }

    /// Reconstructs a card from stored fields without validation.
    #[must_use]
    pub fn from_parts(
        id: CardId,
        title: impl Into<String>,
        description: impl Into<String>,
        labels: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            labels: labels.into_iter().collect(),
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the card title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the card description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the labels in the order they were added.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns each label paired with its display colour.
    pub fn colored_labels(&self) -> impl Iterator<Item = (&str, LabelColor)> {
        self.labels
            .iter()
            .map(|label| (label.as_str(), LabelColor::for_label(label)))
    }

    /// Returns a copy with `label` appended. Duplicates are kept.
    #[must_use]
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        let mut labels = self.labels.clone();
        labels.push(label.into());
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            labels,
        }
    }
}

/// The card shown in the detail view, addressed by its current list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardFocus {
    /// List currently holding the card.
    pub list_id: ListId,
    /// The focused card.
    pub card_id: CardId,
}

impl CardFocus {
    /// Creates a focus on `card_id` within `list_id`.
    #[must_use]
    pub const fn new(list_id: ListId, card_id: CardId) -> Self {
        Self { list_id, card_id }
    }
}
