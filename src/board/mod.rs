//! Boards, lists, and cards.
//!
//! The [`services::BoardStore`] owns the board collection and writes it
//! through to storage on every change. The [`services::BoardEngine`] holds
//! the working copy of one open board: list and card CRUD, labels, the card
//! detail view, and the drag-and-drop protocol that moves cards between
//! lists. Every engine mutation replaces the board snapshot in one step and
//! is handed straight back to the store. Destructive operations pass
//! through the confirmation gate first. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
