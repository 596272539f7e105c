//! Text formatting functions for `lanes`.
//!
//! Plain (non-ANSI) output:
//! - Lane lines: `{id} {name} ({n} notes)`
//! - Note lines: `{id} {task} [{lane}]`
//! - The board: one block per lane with its notes in order

use lanes_lib::{Lane, Note, NoteBook};

/// Placeholder for a lane entry whose note is not in the collection.
const MISSING_NOTE: &str = "(missing note)";

/// Format a single-line lane summary.
#[must_use]
pub fn format_lane_line(lane: &Lane) -> String {
    let count = lane.notes.len();
    let noun = if count == 1 { "note" } else { "notes" };
    format!("{} {} ({count} {noun})", lane.id, lane.name)
}

/// Format a single-line note summary with its lane, if any.
#[must_use]
pub fn format_note_line(note: &Note, lane: Option<&Lane>) -> String {
    lane.map_or_else(
        || format!("{} {} [unattached]", note.id, note.task),
        |lane| format!("{} {} [{}]", note.id, note.task, lane.name),
    )
}

/// Format the whole board, lanes in display order.
#[must_use]
pub fn format_board(lanes: &[Lane], notes: &NoteBook) -> String {
    if lanes.is_empty() {
        return "No lanes.".to_string();
    }

    let mut out = String::new();
    for (i, lane) in lanes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("== {} [{}]\n", lane.name, lane.id));
        if lane.notes.is_empty() {
            out.push_str("   (empty)\n");
        }
        for (pos, id) in lane.notes.iter().enumerate() {
            let task = notes.get(id).map_or(MISSING_NOTE, |n| n.task.as_str());
            out.push_str(&format!("{:>3}. {id} {task}\n", pos + 1));
        }
    }
    out
}
