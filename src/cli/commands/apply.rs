//! Apply command: replay action records against the board.
//!
//! Input is JSONL, one `Action` per line, e.g.
//! `{"action":"attach","lane_id":"lane-x1"}`. Actions run in order; the
//! first failure aborts the run and nothing is saved.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use lanes_lib::Action;
use serde_json::json;

use super::print_json;
use crate::cli::ApplyArgs;
use crate::error::{CliError, Result};
use crate::storage::Session;

/// Execute the apply command.
///
/// # Errors
///
/// Returns `ActionParse` or `ActionFailed` with the 1-based line number
/// of the offending action, or an I/O error reading the input.
pub fn execute(args: &ApplyArgs, dir: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(dir)?;

    let reader: Box<dyn BufRead> = if args.file.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(&args.file)?))
    };
    let actions = parse_actions(reader)?;

    for (line, action) in &actions {
        tracing::info!(line, action = action.name(), "applying");
        session
            .board
            .dispatch(action.clone(), &session.notes)
            .map_err(|source| CliError::ActionFailed {
                line: *line,
                source,
            })?;
    }
    session.save()?;

    if json {
        print_json(&json!({ "applied": actions.len(), "lanes": session.board.lanes() }))?;
    } else {
        println!("Applied {} action(s)", actions.len());
    }
    Ok(())
}

/// Parse non-blank lines into actions, keeping their line numbers.
fn parse_actions(reader: impl BufRead) -> Result<Vec<(usize, Action)>> {
    let mut actions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let action = serde_json::from_str(trimmed).map_err(|e| CliError::ActionParse {
            line: index + 1,
            reason: e.to_string(),
        })?;
        actions.push((index + 1, action));
    }
    Ok(actions)
}
