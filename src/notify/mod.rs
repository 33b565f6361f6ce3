//! User-facing notifications for completed and failed board operations.
//!
//! Board services report outcomes through the [`ports::Notifier`] port. How a
//! notification is shown (a toast, a status line, a log entry) is the
//! adapter's concern:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
