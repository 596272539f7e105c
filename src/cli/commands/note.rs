//! Note commands: add, edit, delete, list.

use std::path::Path;

use super::print_json;
use crate::cli::NoteSubcommand;
use crate::error::Result;
use crate::format::{NoteWithLane, format_note_line};
use crate::storage::Session;

/// Execute a note subcommand.
///
/// # Errors
///
/// Returns an error if the workspace cannot be opened, the note or lane
/// is unknown, or saving fails.
pub fn execute(command: NoteSubcommand, dir: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(dir)?;

    match command {
        NoteSubcommand::Add { task, lane } => {
            let note = session.notes.create_note(&task.join(" "))?;
            session.touch_notes();
            // the new note is the latest one
            if let Some(lane_id) = &lane {
                session.board.attach_latest_note(lane_id, &session.notes)?;
            }
            session.save()?;

            if json {
                print_json(&NoteWithLane::new(&note, session.board.lane_of(&note.id)))?;
            } else {
                println!("Created {}: {}", note.id, note.task);
                if let Some(lane) = session.board.lane_of(&note.id) {
                    println!("Attached to {}", lane.name);
                }
            }
        }
        NoteSubcommand::Edit { id, task } => {
            let note = session.notes.update_note(&id, &task.join(" "))?.clone();
            session.touch_notes();
            session.save()?;
            if json {
                print_json(&NoteWithLane::new(&note, session.board.lane_of(&note.id)))?;
            } else {
                println!("Updated {}: {}", note.id, note.task);
            }
        }
        NoteSubcommand::Delete { id } => {
            let note = session.notes.delete_note(&id)?;
            session.touch_notes();
            let was_attached = session.board.forget_note(&note.id);
            session.save()?;
            if json {
                print_json(&note)?;
            } else {
                println!("Deleted {}: {}", note.id, note.task);
                if was_attached {
                    println!("Removed from board");
                }
            }
        }
        NoteSubcommand::List => {
            let notes = session.notes.notes();
            if json {
                let listed: Vec<NoteWithLane> = notes
                    .iter()
                    .map(|n| NoteWithLane::new(n, session.board.lane_of(&n.id)))
                    .collect();
                print_json(&listed)?;
            } else if notes.is_empty() {
                println!("No notes.");
            } else {
                for note in notes {
                    println!(
                        "{}",
                        format_note_line(note, session.board.lane_of(&note.id))
                    );
                }
                println!("\n{} note(s)", notes.len());
            }
        }
    }

    Ok(())
}
