//! Note collection and the accessor the lane store reads it through.
//!
//! Lanes only hold note ids; the notes themselves live here. The store
//! never owns a collection, it is handed a `NoteSource` whenever it
//! needs to resolve "the most recently created note".

use chrono::Utc;
use tracing::debug;

use crate::error::{LaneError, Result};
use crate::model::{Note, NoteId};
use crate::util::generate_id;

/// Read access to a note collection, most recent note last.
pub trait NoteSource {
    /// Id of the most recently created note, if any.
    fn latest_note_id(&self) -> Option<NoteId>;
}

/// In-memory note collection kept in creation order.
#[derive(Debug, Clone)]
pub struct NoteBook {
    notes: Vec<Note>,
    prefix: String,
}

impl Default for NoteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteBook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            prefix: "note".to_string(),
        }
    }

    /// Build a collection from previously saved notes, keeping their order.
    #[must_use]
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::new()
        }
    }

    /// Set the ID prefix for new notes.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Create a note and append it as the most recent one.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the task text is empty.
    pub fn create_note(&mut self, task: &str) -> Result<Note> {
        let task = task.trim();
        if task.is_empty() {
            return Err(LaneError::validation("task", "cannot be empty"));
        }

        let now = Utc::now();
        let id = generate_id(&self.prefix, task, now, self.notes.len(), |id| {
            self.notes.iter().any(|n| n.id == id)
        });
        let note = Note {
            id,
            task: task.to_string(),
            created_at: now,
        };
        debug!(note_id = %note.id, "created note");
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Replace the task text of a note.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` for an unknown id, or `Validation` for empty text.
    pub fn update_note(&mut self, id: &str, task: &str) -> Result<&Note> {
        let task = task.trim();
        if task.is_empty() {
            return Err(LaneError::validation("task", "cannot be empty"));
        }
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| LaneError::note_not_found(id))?;
        note.task = task.to_string();
        Ok(note)
    }

    /// Remove a note from the collection.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` for an unknown id.
    pub fn delete_note(&mut self, id: &str) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| LaneError::note_not_found(id))?;
        Ok(self.notes.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// All notes, oldest first.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteSource for NoteBook {
    fn latest_note_id(&self) -> Option<NoteId> {
        self.notes.last().map(|n| n.id.clone())
    }
}

impl NoteSource for [Note] {
    fn latest_note_id(&self) -> Option<NoteId> {
        self.last().map(|n| n.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_note_is_last_created() {
        let mut book = NoteBook::new();
        assert!(book.latest_note_id().is_none());

        book.create_note("first").unwrap();
        let second = book.create_note("second").unwrap();
        assert_eq!(book.latest_note_id(), Some(second.id));
    }

    #[test]
    fn test_create_note_rejects_empty_task() {
        let mut book = NoteBook::new();
        let err = book.create_note("   ").unwrap_err();
        assert!(matches!(err, LaneError::Validation { .. }));
        assert!(book.is_empty());
    }

    #[test]
    fn test_note_ids_unique_for_same_task() {
        let mut book = NoteBook::new();
        let a = book.create_note("same").unwrap();
        let b = book.create_note("same").unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("note-"));
    }

    #[test]
    fn test_update_and_delete() {
        let mut book = NoteBook::new();
        let note = book.create_note("draft").unwrap();

        book.update_note(&note.id, "final").unwrap();
        assert_eq!(book.get(&note.id).unwrap().task, "final");

        let removed = book.delete_note(&note.id).unwrap();
        assert_eq!(removed.task, "final");
        assert!(matches!(
            book.delete_note(&note.id),
            Err(LaneError::NoteNotFound { .. })
        ));
    }

    #[test]
    fn test_slice_source() {
        let mut book = NoteBook::new();
        let note = book.create_note("only").unwrap();
        assert_eq!(book.notes().latest_note_id(), Some(note.id));
    }
}
