//! Core data types for lanes-lib.
//!
//! The serde format is the on-disk JSONL format and the `--json` output
//! format of the `lanes` CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a note owned by a separate collection.
pub type NoteId = String;

/// A named, ordered column holding note references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Lane {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Vec<NoteId>,
}

impl Lane {
    /// Position of a note in this lane, if attached.
    #[must_use]
    pub fn position_of(&self, note_id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n == note_id)
    }

    #[must_use]
    pub fn contains(&self, note_id: &str) -> bool {
        self.position_of(note_id).is_some()
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Input to `LaneStore::create_lane`: a name plus optional initial notes.
///
/// The id is always generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NewLane {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<NoteId>,
}

impl NewLane {
    #[must_use]
    pub fn with_notes(name: impl Into<String>, notes: Vec<NoteId>) -> Self {
        Self {
            name: name.into(),
            notes,
        }
    }
}

impl From<&str> for NewLane {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
            notes: Vec::new(),
        }
    }
}

impl From<String> for NewLane {
    fn from(name: String) -> Self {
        Self {
            name,
            notes: Vec::new(),
        }
    }
}

/// A note record held by a `NoteBook`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub task: String,
    pub created_at: DateTime<Utc>,
}

/// Action-shaped input to the store, one variant per mutation.
///
/// Serialized as an object tagged by `"action"`, e.g.
/// `{"action":"move_note","source_id":"note-a1","target_id":"note-b2"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Create {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notes: Vec<NoteId>,
    },
    Update {
        id: String,
        name: String,
    },
    Delete {
        id: String,
    },
    Attach {
        lane_id: String,
        /// `None` attaches the most recently created note.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note_id: Option<NoteId>,
    },
    Detach {
        lane_id: String,
        note_id: NoteId,
    },
    MoveNote {
        source_id: NoteId,
        target_id: NoteId,
    },
    MoveLane {
        source_id: String,
        target_id: String,
    },
}

impl Action {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Attach { .. } => "attach",
            Self::Detach { .. } => "detach",
            Self::MoveNote { .. } => "move_note",
            Self::MoveLane { .. } => "move_lane",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_notes_default_to_empty() {
        let lane: Lane = serde_json::from_str(r#"{"id":"lane-1","name":"Todo"}"#).unwrap();
        assert!(lane.notes.is_empty());
    }

    #[test]
    fn test_action_tagged_format() {
        let action: Action = serde_json::from_str(
            r#"{"action":"move_note","source_id":"note-a","target_id":"note-b"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::MoveNote {
                source_id: "note-a".to_string(),
                target_id: "note-b".to_string(),
            }
        );
    }

    #[test]
    fn test_attach_without_note_id() {
        let action: Action =
            serde_json::from_str(r#"{"action":"attach","lane_id":"lane-1"}"#).unwrap();
        assert_eq!(
            action,
            Action::Attach {
                lane_id: "lane-1".to_string(),
                note_id: None,
            }
        );
        let json = serde_json::to_string(&action).unwrap();
        assert!(!json.contains("note_id"));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result: Result<Action, _> = serde_json::from_str(r#"{"action":"explode"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_position_of() {
        let lane = Lane {
            id: "lane-1".to_string(),
            name: "Todo".to_string(),
            notes: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(lane.position_of("b"), Some(1));
        assert!(!lane.contains("c"));
    }
}
