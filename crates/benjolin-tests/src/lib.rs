//! End-to-end integration tests for the Benjolin meander engine.
//!
//! The library part of this crate holds shared fixtures; the scenarios
//! live under `tests/`.

pub mod fixtures;
