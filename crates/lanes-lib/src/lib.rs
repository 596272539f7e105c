//! `lanes-lib`: in-process kanban lane store.
//!
//! Keeps an ordered sequence of lanes, each holding an ordered list of
//! note references, and applies attach/detach/move mutations to it.
//! Data is stored in memory; the plain lane sequence is the snapshot
//! unit and can be persisted via JSONL files.
//!
//! # Quick Start
//!
//! ```
//! use lanes_lib::{LaneStore, NoteBook};
//!
//! let mut store = LaneStore::new();
//! let mut notes = NoteBook::new();
//!
//! let todo = store.create_lane("Todo").id;
//! let done = store.create_lane("Done").id;
//!
//! // Attach the note that was created last
//! notes.create_note("Write docs").unwrap();
//! store.attach_latest_note(&todo, &notes).unwrap();
//!
//! // Attaching elsewhere moves the note
//! let note = notes.notes()[0].id.clone();
//! store.attach_note(&done, &note).unwrap();
//! assert!(store.lane(&todo).unwrap().notes.is_empty());
//! ```

pub mod error;
pub mod jsonl;
pub mod model;
pub mod notes;
pub mod store;
pub mod util;
pub mod validation;

pub use error::{LaneError, Result, ValidationError};
pub use model::{Action, Lane, NewLane, Note, NoteId};
pub use notes::{NoteBook, NoteSource};
pub use store::{LaneStore, SubscriptionId};
