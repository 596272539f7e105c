use chrono::{DateTime, Utc};
use lanes_lib::{Lane, Note, NoteBook};
use serde::{Deserialize, Serialize};

/// Lane with its notes resolved, for `show --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneView {
    pub id: String,
    pub name: String,
    pub notes: Vec<NoteView>,
}

/// A note reference in board order; `task` is `None` for dangling ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteView {
    pub id: String,
    pub task: Option<String>,
}

/// Note with the lane currently holding it, for `note list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteWithLane {
    pub id: String,
    pub task: String,
    pub created_at: DateTime<Utc>,
    pub lane_id: Option<String>,
}

impl NoteWithLane {
    #[must_use]
    pub fn new(note: &Note, lane: Option<&Lane>) -> Self {
        Self {
            id: note.id.clone(),
            task: note.task.clone(),
            created_at: note.created_at,
            lane_id: lane.map(|l| l.id.clone()),
        }
    }
}

/// Resolve every lane's note ids against the note collection.
#[must_use]
pub fn board_view(lanes: &[Lane], notes: &NoteBook) -> Vec<LaneView> {
    lanes
        .iter()
        .map(|lane| LaneView {
            id: lane.id.clone(),
            name: lane.name.clone(),
            notes: lane
                .notes
                .iter()
                .map(|id| NoteView {
                    id: id.clone(),
                    task: notes.get(id).map(|n| n.task.clone()),
                })
                .collect(),
        })
        .collect()
}
