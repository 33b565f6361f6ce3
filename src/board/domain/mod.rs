//! Domain model for boards, lists, and cards.
//!
//! All board transformations are pure: they borrow the current snapshot and
//! return a new one, leaving the original untouched.

mod board;
mod card;
mod drag;
mod error;
mod ids;
mod label;
mod list;
mod seed;
mod title;

pub use board::{Board, BoardSummary, DeletionOutcome};
pub use card::{Card, CardFocus};
pub use drag::{DragState, DropOutcome};
pub use error::BoardDomainError;
pub use ids::{BoardId, CardId, IdGenerator, ListId};
pub use label::LabelColor;
pub use list::BoardList;
pub use seed::{DEFAULT_LIST_TITLES, sample_boards};
pub use title::{EntityKind, Title};
