//! Step definitions for board behaviour scenarios.

mod then;
mod when;
pub mod world;
