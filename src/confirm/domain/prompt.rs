//! Open prompts and the answers they resolve with.

use super::ConfirmOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a single prompt instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(Uuid);

impl PromptId {
    /// Creates a new random prompt identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PromptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prompt waiting for the human actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    id: PromptId,
    options: ConfirmOptions,
}

impl Prompt {
    /// Opens a prompt with a fresh identifier.
    #[must_use]
    pub fn new(options: ConfirmOptions) -> Self {
        Self {
            id: PromptId::new(),
            options,
        }
    }

    /// Returns the prompt identifier.
    #[must_use]
    pub const fn id(&self) -> PromptId {
        self.id
    }

    /// Returns what the prompt shows.
    #[must_use]
    pub const fn options(&self) -> &ConfirmOptions {
        &self.options
    }
}

/// The human actor's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmDecision {
    /// The affirmative choice was taken.
    Confirmed,
    /// The negative choice was taken.
    Cancelled,
    /// The prompt was closed without a choice (escape key, backdrop click).
    Dismissed,
}

impl ConfirmDecision {
    /// Returns `true` only for [`ConfirmDecision::Confirmed`].
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Dismissed => "dismissed",
        }
    }
}
