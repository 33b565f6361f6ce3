//! Unit tests for the confirmation gate.
