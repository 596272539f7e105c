//! Lane commands: create, rename, delete, move, list.

use std::path::Path;

use super::print_json;
use crate::cli::LaneSubcommand;
use crate::error::Result;
use crate::format::format_lane_line;
use crate::storage::Session;

/// Execute a lane subcommand.
///
/// # Errors
///
/// Returns an error if the workspace cannot be opened, the lane
/// operation is rejected, or saving fails.
pub fn execute(command: LaneSubcommand, dir: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(dir)?;

    match command {
        LaneSubcommand::Create { name } => {
            let lane = session.board.create_lane(name.join(" "));
            session.save()?;
            if json {
                print_json(&lane)?;
            } else {
                println!("Created {}: {}", lane.id, lane.name);
            }
        }
        LaneSubcommand::Rename { id, name } => {
            let name = name.join(" ");
            session.board.rename_lane(&id, &name)?;
            session.save()?;
            if json {
                print_json(&session.board.lane(&id))?;
            } else {
                println!("Renamed {id} to {name}");
            }
        }
        LaneSubcommand::Delete { id } => {
            let removed = session.board.delete_lane(&id)?;
            session.save()?;
            if json {
                print_json(&removed)?;
            } else {
                println!("Deleted {}: {}", removed.id, removed.name);
                if !removed.notes.is_empty() {
                    println!("{} note(s) are now unattached", removed.notes.len());
                }
            }
        }
        LaneSubcommand::Move { source, target } => {
            session.board.move_lane(&source, &target)?;
            session.save()?;
            if json {
                print_json(session.board.lanes())?;
            } else {
                println!("Moved {source} to the position of {target}");
            }
        }
        LaneSubcommand::List => {
            let lanes = session.board.lanes();
            if json {
                print_json(lanes)?;
            } else if lanes.is_empty() {
                println!("No lanes.");
            } else {
                for lane in lanes {
                    println!("{}", format_lane_line(lane));
                }
                println!("\n{} lane(s)", lanes.len());
            }
        }
    }

    Ok(())
}
