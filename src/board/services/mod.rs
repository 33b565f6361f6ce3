//! Application services for the board collection and the open board.

mod engine;
mod error;
mod store;

pub use engine::BoardEngine;
pub use error::{BoardEngineError, BoardEngineResult, BoardStoreError, BoardStoreResult};
pub use store::BoardStore;

use crate::board::domain::{BoardDomainError, EntityKind, Title};
use crate::notify::{domain::Notification, ports::Notifier};

/// Validates a title, reporting a rejection to the notifier.
fn validated_title<N: Notifier + ?Sized>(
    notifier: &N,
    entity: EntityKind,
    raw: impl Into<String>,
) -> Result<Title, BoardDomainError> {
    Title::new(entity, raw).inspect_err(|err| notifier.notify(Notification::error(err.to_string())))
}
