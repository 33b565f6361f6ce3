//! Confirmation gate for destructive board operations.
//!
//! A mutation that destroys data asks the human actor first and suspends
//! until they answer. The gate holds at most one open prompt; the
//! presentation layer watches for it, renders it, and reports the answer
//! back. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
