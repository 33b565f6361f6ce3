//! Taskflow: board, list, and card state engine.
//!
//! This crate holds the state of a personal kanban tool: a collection of
//! boards, each an ordered sequence of lists holding ordered cards. It
//! persists the collection as one JSON snapshot, gates destructive
//! operations behind an explicit confirmation, and reports the outcome of
//! every mutation through a notifier.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board transformations with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for storage, confirmation, and
//!   notification
//! - **Adapters**: Concrete implementations of ports (file, in-memory,
//!   channel-driven)
//!
//! # Modules
//!
//! - [`board`]: Boards, lists, cards, labels, and drag-and-drop
//! - [`confirm`]: Confirmation gate for destructive operations
//! - [`notify`]: User-facing notifications
//! - [`config`]: Runtime configuration
//! - [`telemetry`]: Tracing subscriber installation

pub mod board;
pub mod config;
pub mod confirm;
pub mod notify;
pub mod telemetry;
