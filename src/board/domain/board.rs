//! Board aggregate, its read-model summary, and pure board transformations.

use super::{BoardId, BoardList, Card, CardId, ListId, Title};
use serde::{Deserialize, Serialize};

/// Result of a confirmation-gated deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeletionOutcome {
    /// The actor confirmed and the entity was removed.
    Deleted,
    /// The actor cancelled or dismissed the prompt; nothing changed.
    Declined,
}

impl DeletionOutcome {
    /// Returns `true` when the entity was removed.
    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Top-level container of ordered lists.
///
/// Boards are immutable snapshots: every transformation returns a new board
/// and the caller replaces its copy in one assignment, so a card move is
/// never observable half-applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    lists: Vec<BoardList>,
}

/// Derived overview of a board for the board picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Board identifier.
    pub id: BoardId,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Number of lists on the board.
    pub list_count: usize,
    /// Number of cards across all lists.
    pub card_count: usize,
}

impl Board {
    /// Creates a board from a validated title.
    #[must_use]
    pub fn new(
        id: BoardId,
        title: Title,
        description: impl Into<String>,
        lists: Vec<BoardList>,
    ) -> Self {
        Self::from_parts(id, title.into_inner(), description, lists)
    }

    /// Reconstructs a board from stored fields without validation.
    #[must_use]
    pub fn from_parts(
        id: BoardId,
        title: impl Into<String>,
        description: impl Into<String>,
        lists: Vec<BoardList>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            lists,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the board description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lists in display order.
    #[must_use]
    pub fn lists(&self) -> &[BoardList] {
        &self.lists
    }

    /// Finds a list by identifier.
    #[must_use]
    pub fn list(&self, list_id: &ListId) -> Option<&BoardList> {
        self.lists.iter().find(|list| list.id() == list_id)
    }

    /// Finds a card within a specific list.
    #[must_use]
    pub fn card(&self, list_id: &ListId, card_id: &CardId) -> Option<&Card> {
        self.list(list_id).and_then(|list| list.card(card_id))
    }

    /// Finds a card anywhere on the board, returning the list holding it.
    #[must_use]
    pub fn locate_card(&self, card_id: &CardId) -> Option<(&ListId, &Card)> {
        self.lists
            .iter()
            .find_map(|list| list.card(card_id).map(|card| (list.id(), card)))
    }

    /// Returns the number of cards across all lists.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards().len()).sum()
    }

    /// Returns the derived summary of this board.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            list_count: self.lists.len(),
            card_count: self.card_count(),
        }
    }

    /// Returns a copy with the list sequence replaced.
    #[must_use]
    pub fn with_lists(&self, lists: Vec<BoardList>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            lists,
        }
    }

    /// Returns a copy with `list` appended after the existing lists.
    #[must_use]
    pub fn with_list_appended(&self, list: BoardList) -> Self {
        let mut lists = self.lists.clone();
        lists.push(list);
        self.with_lists(lists)
    }

    /// Returns a copy where only the title of `list_id` changes, or `None`
    /// when the list does not exist.
    #[must_use]
    pub fn with_list_renamed(&self, list_id: &ListId, title: Title) -> Option<Self> {
        self.map_list(list_id, |list| Some(list.with_title(title)))
    }

    /// Returns a copy without `list_id` and its cards, or `None` when the
    /// list does not exist.
    #[must_use]
    pub fn without_list(&self, list_id: &ListId) -> Option<Self> {
        self.list(list_id)?;
        let lists = self
            .lists
            .iter()
            .filter(|list| list.id() != list_id)
            .cloned()
            .collect();
        Some(self.with_lists(lists))
    }

    /// Returns a copy with `card` appended to `list_id`, or `None` when the
    /// list does not exist.
    #[must_use]
    pub fn with_card_appended(&self, list_id: &ListId, card: Card) -> Option<Self> {
        self.map_list(list_id, |list| Some(list.with_card_appended(card)))
    }

    /// Returns a copy without the card, or `None` when the card is not in
    /// `list_id`.
    #[must_use]
    pub fn without_card(&self, list_id: &ListId, card_id: &CardId) -> Option<Self> {
        self.map_list(list_id, |list| {
            list.card(card_id)?;
            Some(list.without_card(card_id))
        })
    }

    /// Returns a copy with `label` appended to the card's labels, or `None`
    /// when the card is not in `list_id`.
    #[must_use]
    pub fn with_label_added(&self, list_id: &ListId, card_id: &CardId, label: &str) -> Option<Self> {
        self.map_list(list_id, |list| {
            list.with_card_updated(card_id, |card| card.with_label(label))
        })
    }

    /// Moves a card from `source` to the end of `target`.
    ///
    /// The card is removed from `source` and appended to `target` in the same
    /// new snapshot. Returns `None`, leaving the board as it was, when the
    /// lists are the same, either list is missing, or the card is not in
    /// `source`.
    #[must_use]
    pub fn with_card_moved(
        &self,
        card_id: &CardId,
        source: &ListId,
        target: &ListId,
    ) -> Option<Self> {
        if source == target {
            return None;
        }
        let card = self.card(source, card_id)?.clone();
        self.list(target)?;

        let lists = self
            .lists
            .iter()
            .map(|list| {
                if list.id() == source {
                    list.without_card(card_id)
                } else if list.id() == target {
                    list.with_card_appended(card.clone())
                } else {
                    list.clone()
                }
            })
            .collect();
        Some(self.with_lists(lists))
    }

    fn map_list(
        &self,
        list_id: &ListId,
        update: impl FnOnce(&BoardList) -> Option<BoardList>,
    ) -> Option<Self> {
        let position = self.lists.iter().position(|list| list.id() == list_id)?;
        let mut lists = self.lists.clone();
        let slot = lists.get_mut(position)?;
        *slot = update(&*slot)?;
        Some(self.with_lists(lists))
    }
}
