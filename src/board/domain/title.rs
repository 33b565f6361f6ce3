//! Validated titles for boards, lists, and cards.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of entity a title belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A board.
    Board,
    /// A list within a board.
    List,
    /// A card within a list.
    Card,
}

impl EntityKind {
    /// Returns the capitalised display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::List => "List",
            Self::Card => "Card",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A title that is not blank.
///
/// The text is kept exactly as entered; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Validates a title for the given entity kind.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty or
    /// whitespace-only.
    pub fn new(entity: EntityKind, value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle { entity });
        }
        Ok(Self(raw))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
