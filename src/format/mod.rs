//! Output formatting for `lanes`.
//!
//! Supports both human-readable text output and machine-parseable JSON
//! (`--json`). JSON views resolve note ids against the note collection so
//! consumers get task text alongside the board order.

mod output;
mod text;

pub use output::{LaneView, NoteView, NoteWithLane, board_view};
pub use text::{format_board, format_lane_line, format_note_line};
