//! `lanes` - Kanban lane board CLI
//!
//! This crate wraps the in-memory board of `lanes-lib` in a command-line
//! front end that dispatches actions and persists the board between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`storage`] - Workspace files (JSONL board and notes)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod storage;

pub use error::{CliError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
