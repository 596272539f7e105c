//! Command handlers.
//!
//! Each handler opens the workspace, applies one operation, saves what
//! changed and prints the result as text or JSON.

pub mod apply;
pub mod board;
pub mod completions;
pub mod init;
pub mod lane;
pub mod note;
pub mod version;

use serde::Serialize;

use crate::error::Result;

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{output}");
    Ok(())
}
