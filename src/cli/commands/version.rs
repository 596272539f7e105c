//! Version command implementation.

use serde::Serialize;

use super::print_json;
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if json {
        print_json(&VersionOutput { version, build })?;
    } else {
        println!("lanes {version} ({build})");
    }
    Ok(())
}
