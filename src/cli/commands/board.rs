//! Board commands: attach, detach, move, show.

use std::path::Path;

use super::print_json;
use crate::cli::{AttachArgs, DetachArgs, MoveArgs};
use crate::error::Result;
use crate::format::{board_view, format_board};
use crate::storage::Session;

/// Attach a note to a lane, or the latest note when none is given.
///
/// # Errors
///
/// Returns an error if the lane is unknown, the note is already in that
/// lane, there are no notes to pick from, or saving fails.
pub fn attach(args: &AttachArgs, dir: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(dir)?;

    let note_id = match &args.note {
        Some(note) => {
            session.board.attach_note(&args.lane, note)?;
            note.clone()
        }
        None => session
            .board
            .attach_latest_note(&args.lane, &session.notes)?,
    };
    session.save()?;

    if json {
        print_json(&session.board.lane(&args.lane))?;
    } else {
        println!("Attached {note_id} to {}", args.lane);
    }
    Ok(())
}

/// Detach a note from a lane.
///
/// # Errors
///
/// Returns an error if the lane is unknown, the note is not in it, or
/// saving fails.
pub fn detach(args: &DetachArgs, dir: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(dir)?;
    session.board.detach_note(&args.lane, &args.note)?;
    session.save()?;

    if json {
        print_json(&session.board.lane(&args.lane))?;
    } else {
        println!("Detached {} from {}", args.note, args.lane);
    }
    Ok(())
}

/// Move a note to sit before another note.
///
/// # Errors
///
/// Returns an error if either note is not on the board, or saving fails.
pub fn move_note(args: &MoveArgs, dir: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(dir)?;
    session.board.move_note(&args.source, &args.target)?;
    session.save()?;

    if json {
        print_json(&session.board.lane_of(&args.source))?;
    } else {
        println!("Moved {} before {}", args.source, args.target);
    }
    Ok(())
}

/// Print the whole board.
///
/// # Errors
///
/// Returns an error if the workspace cannot be opened.
pub fn show(dir: &Path, json: bool) -> Result<()> {
    let session = Session::open(dir)?;

    if json {
        print_json(&board_view(session.board.lanes(), &session.notes))?;
    } else {
        print!("{}", format_board(session.board.lanes(), &session.notes));
        if session.board.is_empty() {
            println!();
        }
    }
    Ok(())
}
