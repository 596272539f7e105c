//! JSONL file I/O for board snapshots.
//!
//! Each line of a board file is one complete `Lane`, in display order.
//! Note files use the same layout with one `Note` per line.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{LaneError, Result};
use crate::model::{Lane, Note};

/// Load a lane sequence from a JSONL file.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing, `Io` if it cannot be
/// read, or `JsonlParse` if any line is invalid.
pub fn load_lanes(path: &Path) -> Result<Vec<Lane>> {
    load(path)
}

/// Save a lane sequence to a JSONL file with atomic write.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save_lanes(path: &Path, lanes: &[Lane]) -> Result<()> {
    save(path, lanes)
}

/// Load notes from a JSONL file, oldest first.
///
/// # Errors
///
/// Same as [`load_lanes`].
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    load(path)
}

/// Save notes to a JSONL file with atomic write.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save_notes(path: &Path, notes: &[Note]) -> Result<()> {
    save(path, notes)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LaneError::FileNotFound(path.to_path_buf())
        } else {
            LaneError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record = serde_json::from_str(trimmed).map_err(|e| LaneError::JsonlParse {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Write to a temp file next to `path`, then rename it into place.
fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let tmp_path = path.with_extension("jsonl.tmp");
    let mut file = fs::File::create(&tmp_path)?;

    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(file, "{json}")?;
    }

    file.flush()?;
    drop(file);

    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn lane(id: &str, notes: &[&str]) -> Lane {
        Lane {
            id: id.to_string(),
            name: format!("Lane {id}"),
            notes: notes.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_lanes_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.jsonl");

        let lanes = vec![lane("lane-b", &["n2", "n1"]), lane("lane-a", &[])];
        save_lanes(&path, &lanes).unwrap();

        let loaded = load_lanes(&path).unwrap();
        assert_eq!(loaded, lanes);
        assert!(!path.with_extension("jsonl.tmp").exists());
    }

    #[test]
    fn test_notes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.jsonl");
        let notes = vec![Note {
            id: "note-abc".to_string(),
            task: "Write tests".to_string(),
            created_at: Utc::now(),
        }];

        save_notes(&path, &notes).unwrap();
        assert_eq!(load_notes(&path).unwrap(), notes);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_lanes(Path::new("/nonexistent/board.jsonl"));
        assert!(matches!(result, Err(LaneError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        fs::write(&path, "").unwrap();

        assert!(load_lanes(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blanks.jsonl");
        fs::write(&path, "\n{\"id\":\"lane-1\",\"name\":\"Todo\"}\n\n").unwrap();

        let loaded = load_lanes(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].notes.is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jsonl");
        fs::write(&path, "{\"id\":\"lane-1\",\"name\":\"Todo\"}\nnot json\n").unwrap();

        let err = load_lanes(&path).unwrap_err();
        assert!(matches!(err, LaneError::JsonlParse { line: 2, .. }));
    }
}
