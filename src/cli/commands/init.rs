use std::path::Path;

use serde_json::json;

use super::print_json;
use crate::error::Result;
use crate::storage::init_workspace;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the workspace exists (without `force`) or files
/// cannot be written.
pub fn execute(dir: &Path, force: bool, json: bool) -> Result<()> {
    let config = init_workspace(dir, force)?;

    if json {
        print_json(&json!({
            "workspace": dir.display().to_string(),
            "lanes": config.default_lanes,
        }))?;
    } else {
        println!("Initialized lanes workspace in {}", dir.display());
        if !config.default_lanes.is_empty() {
            println!("Created lanes: {}", config.default_lanes.join(", "));
        }
    }
    Ok(())
}
