//! Confirmation host adapters.
//!
//! [`ChannelConfirmationGate`] is the production gate driven by a
//! presentation layer; [`ScriptedConfirmationHost`] answers from a script
//! and suits tests and headless callers.

mod channel;
mod memory;

pub use channel::ChannelConfirmationGate;
pub use memory::ScriptedConfirmationHost;
