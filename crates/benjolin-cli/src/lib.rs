//! Benjolin CLI library.
//!
//! This crate provides the functionality behind the `benjolin` binary:
//! input loading, the command implementations, and their machine-
//! readable JSON output types.

pub mod cli_args;
pub mod commands;
pub mod input;
