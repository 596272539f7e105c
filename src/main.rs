//! `lanes` - Kanban lane board
//!
//! Ordered lanes of note references, stored as JSONL in a workspace
//! directory. One process per command; no daemon.

use lanes::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
