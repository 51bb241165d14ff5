//! Core library for `linecut`, a tool that removes a range of lines from a
//! text file in place.
//!
//! The library reads a file as lines that keep their own line endings,
//! removes one or more half-open `[start, end)` ranges, and writes the rest
//! back, byte for byte outside the removed ranges.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

/// Module defining the error type shared by the library.
pub mod error;

/// Module modelling a text file as lines with their endings.
pub mod lines;

/// Module defining validated half-open line ranges.
pub mod range;

/// Module applying several line ranges to one buffer.
pub mod rewriter;

/// Module for boundary-line guard patterns.
pub mod guard;

/// Module performing removals against files on disk.
pub mod remover;

/// Module defining named removal jobs.
pub mod job;

/// Module containing the built-in preset jobs.
pub mod presets;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module containing utility functions.
pub mod utils;

/// Module for CLI output formatting.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point shared by both binaries.
pub mod entry_point;

pub use error::{RemoveError, Result};
pub use lines::LineBuffer;
pub use range::LineRange;
pub use remover::{remove_lines, RemovalReport};
