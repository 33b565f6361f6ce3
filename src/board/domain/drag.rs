//! Drag-and-drop interaction state.
//!
//! ```text
//! Idle --begin--> Dragging { hovering: None }
//! Dragging --hover(list)--> Dragging { hovering: Some(list) }
//! Dragging --drop | cancel--> Idle
//! ```
//!
//! Hovering only drives visual affordance. Dropping onto the source list is
//! a no-op, never a reorder.

use super::{Card, ListId};

/// Result of releasing a dragged card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropOutcome {
    /// The card left its source list and was appended to the target.
    Moved,
    /// Nothing changed.
    Unchanged,
}

/// Where the drag-and-drop protocol currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No card is being dragged.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging {
        /// The card as it was when the drag began.
        card: Card,
        /// The list the card was picked up from.
        source: ListId,
        /// The list whose drop region the pointer is over, if any.
        hovering: Option<ListId>,
    },
}

impl DragState {
    /// Starts dragging `card` out of `source`.
    #[must_use]
    pub const fn begin(card: Card, source: ListId) -> Self {
        Self::Dragging {
            card,
            source,
            hovering: None,
        }
    }

    /// Records the list under the pointer. Ignored while idle.
    pub fn hover(&mut self, list_id: ListId) {
        if let Self::Dragging { hovering, .. } = self {
            *hovering = Some(list_id);
        }
    }

    /// Returns `true` while a card is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns the list under the pointer while dragging.
    #[must_use]
    pub const fn hovering(&self) -> Option<&ListId> {
        match self {
            Self::Dragging {
                hovering: Some(list_id),
                ..
            } => Some(list_id),
            _ => None,
        }
    }

    /// Returns the dragged card and its source list.
    #[must_use]
    pub const fn dragged(&self) -> Option<(&Card, &ListId)> {
        match self {
            Self::Dragging { card, source, .. } => Some((card, source)),
            Self::Idle => None,
        }
    }

    /// Resets to [`DragState::Idle`], returning the state that was active.
    pub fn finish(&mut self) -> Self {
        std::mem::take(self)
    }
}
