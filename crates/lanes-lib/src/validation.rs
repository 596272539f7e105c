//! Snapshot validation.
//!
//! These routines check board invariants on a lane sequence coming from
//! outside the store (a JSONL file, a caller-built snapshot) and return
//! structured validation errors without mutating anything.

use std::collections::{HashMap, HashSet};

use crate::error::ValidationError;
use crate::model::Lane;

/// Validates lane sequences before they replace store state.
pub struct SnapshotValidator;

impl SnapshotValidator {
    /// Validate a lane sequence and return every violation found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any invariant is violated.
    pub fn validate(lanes: &[Lane]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut lane_ids = HashSet::new();
        // note id -> lane id of its first holder
        let mut holders: HashMap<&str, &str> = HashMap::new();

        for lane in lanes {
            if lane.id.trim().is_empty() {
                errors.push(ValidationError::new("id", "lane id cannot be empty"));
            } else if !lane_ids.insert(lane.id.as_str()) {
                errors.push(ValidationError::new(
                    "id",
                    format!("duplicate lane id {}", lane.id),
                ));
            }

            let mut seen_in_lane = HashSet::new();
            for note in &lane.notes {
                if !seen_in_lane.insert(note.as_str()) {
                    errors.push(ValidationError::new(
                        "notes",
                        format!("note {note} listed twice in lane {}", lane.id),
                    ));
                    continue;
                }
                if let Some(holder) = holders.insert(note.as_str(), lane.id.as_str()) {
                    errors.push(ValidationError::new(
                        "notes",
                        format!("note {note} is in lanes {holder} and {}", lane.id),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
