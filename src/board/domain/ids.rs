//! Identifier types and the identifier generator.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a board, unique across the store.
    BoardId
);

string_id!(
    /// Identifier of a list, unique within its board.
    ListId
);

string_id!(
    /// Identifier of a card, unique within its board.
    CardId
);

/// Sequence shared by every generator in the process.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Issues identifiers of the form `<prefix>-<unix millis>-<sequence>`.
///
/// The sequence is shared by all identifier kinds and all generators and
/// never repeats within the process, so identifiers stay unique when several
/// entities are created within the same millisecond, even by separate
/// stores.
#[derive(Debug)]
pub struct IdGenerator<C> {
    clock: Arc<C>,
}

impl<C: Clock> IdGenerator<C> {
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Issues a new board identifier.
    #[must_use]
    pub fn board_id(&self) -> BoardId {
        BoardId(self.next("board"))
    }

    /// Issues a new list identifier.
    #[must_use]
    pub fn list_id(&self) -> ListId {
        ListId(self.next("list"))
    }

    /// Issues a new card identifier.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        CardId(self.next("card"))
    }

    fn next(&self, prefix: &str) -> String {
        let millis = self.clock.utc().timestamp_millis();
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{millis}-{sequence}")
    }
}
