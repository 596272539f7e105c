//! Workspace storage for `lanes`.
//!
//! A workspace is a directory (default `.lanes/`) holding:
//! - `board.jsonl` - the lane sequence, one lane per line
//! - `notes.jsonl` - the note collection, oldest first
//! - `config.yaml` - optional configuration
//!
//! [`Session`] loads both files into memory, lets a command mutate them,
//! and writes back whatever changed.

use std::fs;
use std::path::{Path, PathBuf};

use lanes_lib::{LaneError, LaneStore, NoteBook, jsonl};

use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE, Config};
use crate::error::{CliError, Result};

pub const BOARD_FILE: &str = "board.jsonl";
pub const NOTES_FILE: &str = "notes.jsonl";

/// Create a workspace directory with empty board and note files.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if a board exists and `force` is false,
/// or `Io` if files cannot be written.
pub fn init_workspace(dir: &Path, force: bool) -> Result<Config> {
    let board_path = dir.join(BOARD_FILE);
    if board_path.exists() && !force {
        return Err(CliError::AlreadyInitialized { path: board_path });
    }
    fs::create_dir_all(dir)?;

    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }
    let config = Config::load(dir)?;

    let mut store = LaneStore::new();
    store.set_prefix(&config.lane_prefix);
    for name in &config.default_lanes {
        store.create_lane(name.as_str());
    }
    jsonl::save_lanes(&board_path, store.lanes())?;
    jsonl::save_notes(&dir.join(NOTES_FILE), &[])?;

    tracing::info!(dir = %dir.display(), lanes = store.len(), "initialized workspace");
    Ok(config)
}

/// An open workspace: configuration plus the in-memory board and notes.
#[derive(Debug)]
pub struct Session {
    dir: PathBuf,
    pub config: Config,
    pub board: LaneStore,
    pub notes: NoteBook,
    notes_dirty: bool,
}

impl Session {
    /// Open an initialized workspace.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the directory is missing, or any load,
    /// parse, or snapshot validation error.
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CliError::NotInitialized);
        }
        let config = Config::load(dir)?;

        let lanes = load_or_empty(jsonl::load_lanes(&dir.join(BOARD_FILE)))?;
        let mut board = LaneStore::from_lanes(lanes)?;
        board.set_prefix(&config.lane_prefix);
        board.subscribe(|lanes| {
            tracing::debug!(
                lanes = lanes.len(),
                notes = lanes.iter().map(|l| l.notes.len()).sum::<usize>(),
                "board changed"
            );
        });

        let mut notes =
            NoteBook::from_notes(load_or_empty(jsonl::load_notes(&dir.join(NOTES_FILE)))?);
        notes.set_prefix(&config.note_prefix);

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            board,
            notes,
            notes_dirty: false,
        })
    }

    /// Flag the note collection for saving.
    pub fn touch_notes(&mut self) {
        self.notes_dirty = true;
    }

    /// Write back the board and notes if they changed.
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Json` on write failure.
    pub fn save(&mut self) -> Result<()> {
        if self.notes_dirty {
            jsonl::save_notes(&self.dir.join(NOTES_FILE), self.notes.notes())?;
            self.notes_dirty = false;
        }
        if self.board.is_dirty() {
            jsonl::save_lanes(&self.dir.join(BOARD_FILE), self.board.lanes())?;
            self.board.mark_clean();
            tracing::debug!(dir = %self.dir.display(), "saved board");
        }
        Ok(())
    }
}

/// A missing file reads as an empty collection.
fn load_or_empty<T>(loaded: lanes_lib::Result<Vec<T>>) -> Result<Vec<T>> {
    match loaded {
        Ok(records) => Ok(records),
        Err(LaneError::FileNotFound(_)) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_uninitialized() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            Session::open(&missing),
            Err(CliError::NotInitialized)
        ));
    }

    #[test]
    fn test_init_then_reinit() {
        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join(".lanes");

        init_workspace(&ws, false).unwrap();
        assert!(ws.join(BOARD_FILE).exists());
        assert!(ws.join(CONFIG_FILE).exists());

        assert!(matches!(
            init_workspace(&ws, false),
            Err(CliError::AlreadyInitialized { .. })
        ));
        init_workspace(&ws, true).unwrap();
    }

    #[test]
    fn test_init_creates_default_lanes() {
        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join(".lanes");
        fs::create_dir_all(&ws).unwrap();
        fs::write(ws.join(CONFIG_FILE), "default_lanes: [Todo, Doing, Done]\n").unwrap();

        init_workspace(&ws, false).unwrap();
        let session = Session::open(&ws).unwrap();
        let names: Vec<_> = session
            .board
            .lanes()
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, ["Todo", "Doing", "Done"]);
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join(".lanes");
        init_workspace(&ws, false).unwrap();

        let mut session = Session::open(&ws).unwrap();
        let lane = session.board.create_lane("Todo");
        let note = session.notes.create_note("Write it").unwrap();
        session.touch_notes();
        session.board.attach_note(&lane.id, &note.id).unwrap();
        session.save().unwrap();
        assert!(!session.board.is_dirty());

        let reopened = Session::open(&ws).unwrap();
        assert_eq!(reopened.board.lanes(), session.board.lanes());
        assert_eq!(reopened.notes.notes(), session.notes.notes());
    }

    #[test]
    fn test_open_rejects_corrupt_board() {
        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join(".lanes");
        init_workspace(&ws, false).unwrap();
        fs::write(
            ws.join(BOARD_FILE),
            "{\"id\":\"a\",\"name\":\"A\",\"notes\":[\"n1\"]}\n{\"id\":\"b\",\"name\":\"B\",\"notes\":[\"n1\"]}\n",
        )
        .unwrap();

        assert!(matches!(
            Session::open(&ws),
            Err(CliError::Lane(LaneError::InvalidSnapshot { .. }))
        ));
    }
}
