//! Presentation options for a confirmation prompt.

use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_TITLE: &str = "Confirm Action";
const DEFAULT_MESSAGE: &str = "Are you sure you want to proceed?";
const DEFAULT_CONFIRM_TEXT: &str = "Confirm";
const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Visual severity of a prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmKind {
    /// The action is reversible or low impact.
    #[default]
    Warning,
    /// The action destroys data.
    Danger,
    /// The prompt only asks for acknowledgement.
    Info,
}

impl ConfirmKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ConfirmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text and severity shown by a confirmation prompt.
///
/// Every field has a default, so callers only override what they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmOptions {
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    kind: ConfirmKind,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            message: DEFAULT_MESSAGE.to_owned(),
            confirm_text: DEFAULT_CONFIRM_TEXT.to_owned(),
            cancel_text: DEFAULT_CANCEL_TEXT.to_owned(),
            kind: ConfirmKind::default(),
        }
    }
}

impl ConfirmOptions {
    /// Creates options populated with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt guarding board deletion.
    #[must_use]
    pub fn delete_board() -> Self {
        Self::destructive(
            "Delete Board",
            "Are you sure you want to delete this board? This action cannot be undone.",
        )
    }

    /// Prompt guarding list deletion.
    #[must_use]
    pub fn delete_list() -> Self {
        Self::destructive(
            "Delete List",
            "Are you sure you want to delete this list and all its cards?",
        )
    }

    /// Prompt guarding card deletion.
    #[must_use]
    pub fn delete_card() -> Self {
        Self::destructive("Delete Card", "Are you sure you want to delete this card?")
    }

    fn destructive(title: &str, message: &str) -> Self {
        Self::new()
            .with_title(title)
            .with_message(message)
            .with_confirm_text("Delete")
            .with_kind(ConfirmKind::Danger)
    }

    /// Sets the prompt title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the prompt body.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the label of the affirmative choice.
    #[must_use]
    pub fn with_confirm_text(mut self, confirm_text: impl Into<String>) -> Self {
        self.confirm_text = confirm_text.into();
        self
    }

    /// Sets the label of the negative choice.
    #[must_use]
    pub fn with_cancel_text(mut self, cancel_text: impl Into<String>) -> Self {
        self.cancel_text = cancel_text.into();
        self
    }

    /// Sets the prompt severity.
    #[must_use]
    pub const fn with_kind(mut self, kind: ConfirmKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the prompt title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the prompt body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the label of the affirmative choice.
    #[must_use]
    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    /// Returns the label of the negative choice.
    #[must_use]
    pub fn cancel_text(&self) -> &str {
        &self.cancel_text
    }

    /// Returns the prompt severity.
    #[must_use]
    pub const fn kind(&self) -> ConfirmKind {
        self.kind
    }
}
