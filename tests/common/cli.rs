//! Helpers for running the `lanes` binary against a scratch workspace.

use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp directory to run `lanes` in; `.lanes/` is created inside it.
pub struct LanesWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl LanesWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Workspace initialized with `lanes init`.
    pub fn initialized() -> Self {
        let workspace = Self::new();
        let output = run_lanes(&workspace, ["init"], "init");
        assert!(output.status.success(), "init failed: {}", output.stderr);
        workspace
    }
}

pub struct LanesOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl LanesOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

pub fn run_lanes<I, S>(workspace: &LanesWorkspace, args: I, label: &str) -> LanesOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run_lanes_with_stdin(workspace, args, "", label)
}

pub fn run_lanes_with_stdin<I, S>(
    workspace: &LanesWorkspace,
    args: I,
    stdin: &str,
    label: &str,
) -> LanesOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::cargo_bin("lanes")
        .expect("lanes binary")
        .current_dir(&workspace.root)
        .env_remove("LANES_DIR")
        .env_remove("LANES_LANE_PREFIX")
        .env_remove("LANES_NOTE_PREFIX")
        .env_remove("RUST_LOG")
        .args(args)
        .write_stdin(stdin.to_string())
        .output()
        .unwrap_or_else(|e| panic!("[{label}] failed to run lanes: {e}"));

    LanesOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Create a lane and return its id (via `--json`).
pub fn create_lane(workspace: &LanesWorkspace, name: &str) -> String {
    let output = run_lanes(workspace, ["--json", "lane", "create", name], "create_lane");
    assert!(output.status.success(), "lane create failed: {}", output.stderr);
    output.json()["id"].as_str().expect("lane id").to_string()
}

/// Create a note, optionally attached to a lane, and return its id.
pub fn add_note(workspace: &LanesWorkspace, task: &str, lane: Option<&str>) -> String {
    let mut args = vec!["--json", "note", "add", task];
    if let Some(lane) = lane {
        args.extend(["--lane", lane]);
    }
    let output = run_lanes(workspace, args, "add_note");
    assert!(output.status.success(), "note add failed: {}", output.stderr);
    output.json()["id"].as_str().expect("note id").to_string()
}

/// Note ids of a lane in board order, read from `show --json`.
pub fn lane_notes(workspace: &LanesWorkspace, lane_id: &str) -> Vec<String> {
    let output = run_lanes(workspace, ["--json", "show"], "show");
    assert!(output.status.success(), "show failed: {}", output.stderr);
    output.json()
        .as_array()
        .expect("lane array")
        .iter()
        .find(|lane| lane["id"] == lane_id)
        .unwrap_or_else(|| panic!("lane {lane_id} not on board"))["notes"]
        .as_array()
        .expect("notes array")
        .iter()
        .map(|n| n["id"].as_str().expect("note id").to_string())
        .collect()
}
