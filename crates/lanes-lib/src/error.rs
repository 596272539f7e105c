//! Error types for `lanes-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for lane store operations.
#[derive(Error, Debug)]
pub enum LaneError {
    // === Lookup Errors ===
    /// Lane with the specified ID was not found.
    #[error("Lane not found: {id}")]
    LaneNotFound { id: String },

    /// Note reference is not held by any lane (or collection).
    #[error("Note not found: {id}")]
    NoteNotFound { id: String },

    /// The implicit "latest note" path found an empty note collection.
    #[error("No notes available to attach")]
    NoNotes,

    // === Attachment Errors ===
    /// Note is already attached to the target lane.
    #[error("Note {note_id} is already attached to lane {lane_id}")]
    DuplicateAttach { lane_id: String, note_id: String },

    /// Note is not attached to the lane it should be detached from.
    #[error("Note {note_id} is not attached to lane {lane_id}")]
    DetachMissing { lane_id: String, note_id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A snapshot violates one or more board invariants.
    #[error("Invalid snapshot: {errors:?}")]
    InvalidSnapshot { errors: Vec<ValidationError> },

    // === JSONL Errors ===
    /// Failed to parse a line in a JSONL file.
    #[error("JSONL parse error at line {line}: {reason}")]
    JsonlParse { line: usize, reason: String },

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl LaneError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn lane_not_found(id: impl Into<String>) -> Self {
        Self::LaneNotFound { id: id.into() }
    }

    #[must_use]
    pub fn note_not_found(id: impl Into<String>) -> Self {
        Self::NoteNotFound { id: id.into() }
    }

    /// Whether the error is one of the "skipped mutation" outcomes the
    /// board reports without treating them as hard failures.
    #[must_use]
    pub const fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::LaneNotFound { .. } | Self::DuplicateAttach { .. } | Self::DetachMissing { .. }
        )
    }
}

/// Result type using `LaneError`.
pub type Result<T> = std::result::Result<T, LaneError>;
