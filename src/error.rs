//! Error types for the `lanes` CLI.

use std::path::PathBuf;

use lanes_lib::LaneError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Board or note operation failed.
    #[error(transparent)]
    Lane(#[from] LaneError),

    // === Workspace Errors ===
    /// No workspace directory yet.
    #[error("Lanes workspace not initialized: run 'lanes init' first")]
    NotInitialized,

    /// `init` found an existing workspace.
    #[error("Already initialized: {path} (use --force to reinitialize)")]
    AlreadyInitialized { path: PathBuf },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Apply Errors ===
    /// An action line could not be parsed.
    #[error("Action parse error at line {line}: {reason}")]
    ActionParse { line: usize, reason: String },

    /// An action was rejected by the board.
    #[error("Action at line {line} failed: {source}")]
    ActionFailed {
        line: usize,
        #[source]
        source: LaneError,
    },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
