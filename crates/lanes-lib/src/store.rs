//! In-memory lane store backed by an ordered `Vec<Lane>`.
//!
//! Provides the full mutation API for lanes and the note references
//! they hold. Every public mutation either applies completely and
//! notifies subscribers once, or returns an error and leaves the board
//! untouched.

use std::fmt;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{LaneError, Result};
use crate::model::{Action, Lane, NewLane, NoteId};
use crate::notes::NoteSource;
use crate::util::generate_id;
use crate::validation::SnapshotValidator;

type Listener = Box<dyn FnMut(&[Lane])>;

/// Handle returned by [`LaneStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// In-memory kanban board state.
///
/// Holds the ordered lane sequence. Use `from_lanes()` to start from a
/// saved snapshot and `snapshot()` to get one back.
pub struct LaneStore {
    lanes: Vec<Lane>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    dirty: bool,
    prefix: String,
}

impl Default for LaneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LaneStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaneStore")
            .field("lanes", &self.lanes)
            .field("listeners", &self.listeners.len())
            .field("dirty", &self.dirty)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl LaneStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lanes: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 1,
            dirty: false,
            prefix: "lane".to_string(),
        }
    }

    /// Create a store from a saved lane sequence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` if the lanes violate board invariants.
    pub fn from_lanes(lanes: Vec<Lane>) -> Result<Self> {
        SnapshotValidator::validate(&lanes)
            .map_err(|errors| LaneError::InvalidSnapshot { errors })?;
        Ok(Self {
            lanes,
            ..Self::new()
        })
    }

    /// Set the ID prefix for new lanes.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Get the ID prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether any mutation happened since creation or `mark_clean()`.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a listener called with the full lane sequence after every
    /// successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Lane]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // ========================================================================
    // Lanes
    // ========================================================================

    /// Append a new lane with a freshly generated id.
    ///
    /// Initial notes are deduplicated and pulled out of any lane that
    /// already holds them.
    pub fn create_lane(&mut self, lane: impl Into<NewLane>) -> Lane {
        let NewLane { name, notes } = lane.into();

        let id = generate_id(&self.prefix, &name, Utc::now(), self.lanes.len(), |id| {
            self.lanes.iter().any(|l| l.id == id)
        });

        let mut unique: Vec<NoteId> = Vec::with_capacity(notes.len());
        for note in notes {
            if !unique.contains(&note) {
                self.take_note(&note);
                unique.push(note);
            }
        }

        let lane = Lane {
            id,
            name,
            notes: unique,
        };
        self.lanes.push(lane.clone());
        self.commit("create", &lane.id);

        lane
    }

    /// Rename a lane in place.
    ///
    /// # Errors
    ///
    /// Returns `LaneNotFound` if the lane doesn't exist.
    pub fn rename_lane(&mut self, id: &str, name: &str) -> Result<()> {
        let index = self.require_lane(id)?;
        name.clone_into(&mut self.lanes[index].name);
        self.commit("update", id);
        Ok(())
    }

    /// Remove a lane, shifting the lanes after it.
    ///
    /// # Errors
    ///
    /// Returns `LaneNotFound` if the lane doesn't exist.
    pub fn delete_lane(&mut self, id: &str) -> Result<Lane> {
        let index = self.require_lane(id)?;
        let removed = self.lanes.remove(index);
        self.commit("delete", id);
        Ok(removed)
    }

    /// Move a lane to the position currently held by another lane.
    ///
    /// Removes the source, then inserts it at the target's original index.
    ///
    /// # Errors
    ///
    /// Returns `LaneNotFound` if either lane doesn't exist.
    pub fn move_lane(&mut self, source_id: &str, target_id: &str) -> Result<()> {
        let source = self.require_lane(source_id)?;
        let target = self.require_lane(target_id)?;

        let lane = self.lanes.remove(source);
        self.lanes.insert(target, lane);
        self.commit("move_lane", source_id);
        Ok(())
    }

    // ========================================================================
    // Notes
    // ========================================================================

    /// Attach a note to the end of a lane, detaching it from any other lane.
    ///
    /// # Errors
    ///
    /// Returns `LaneNotFound` if the lane doesn't exist, or
    /// `DuplicateAttach` if the lane already holds the note.
    pub fn attach_note(&mut self, lane_id: &str, note_id: &str) -> Result<()> {
        let target = self.require_lane(lane_id)?;

        if self.lanes[target].contains(note_id) {
            warn!(lane_id, note_id, "note already attached to lane");
            return Err(LaneError::DuplicateAttach {
                lane_id: lane_id.to_string(),
                note_id: note_id.to_string(),
            });
        }

        self.take_note(note_id);
        self.lanes[target].notes.push(note_id.to_string());
        self.commit("attach", note_id);
        Ok(())
    }

    /// Attach the most recently created note of `source` to a lane.
    ///
    /// Returns the id of the attached note.
    ///
    /// # Errors
    ///
    /// Returns `NoNotes` if the source is empty, otherwise the errors of
    /// [`attach_note`](Self::attach_note).
    pub fn attach_latest_note<S>(&mut self, lane_id: &str, source: &S) -> Result<NoteId>
    where
        S: NoteSource + ?Sized,
    {
        let note_id = source.latest_note_id().ok_or_else(|| {
            warn!(lane_id, "no notes to attach");
            LaneError::NoNotes
        })?;
        self.attach_note(lane_id, &note_id)?;
        Ok(note_id)
    }

    /// Remove a note from a lane.
    ///
    /// # Errors
    ///
    /// Returns `LaneNotFound` if the lane doesn't exist, or
    /// `DetachMissing` if the note is not in that lane.
    pub fn detach_note(&mut self, lane_id: &str, note_id: &str) -> Result<()> {
        let index = self.require_lane(lane_id)?;
        let lane = &mut self.lanes[index];

        let Some(position) = lane.position_of(note_id) else {
            warn!(lane_id, note_id, "note to detach is not in lane");
            return Err(LaneError::DetachMissing {
                lane_id: lane_id.to_string(),
                note_id: note_id.to_string(),
            });
        };

        lane.notes.remove(position);
        self.commit("detach", note_id);
        Ok(())
    }

    /// Move a note to sit immediately before another note.
    ///
    /// Within one lane this removes the source and then inserts it at the
    /// target's original index, so `[n1, n2, n3]` with `n1 -> n2` becomes
    /// `[n2, n1, n3]`. Across lanes the source is inserted at the target's
    /// index in the target's lane.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if either note is not in any lane.
    pub fn move_note(&mut self, source_id: &str, target_id: &str) -> Result<()> {
        let (source_lane, source_index) = self.require_note(source_id)?;
        let (target_lane, target_index) = self.require_note(target_id)?;

        let note = self.lanes[source_lane].notes.remove(source_index);
        self.lanes[target_lane].notes.insert(target_index, note);
        self.commit("move_note", source_id);
        Ok(())
    }

    /// Remove a note from whichever lane holds it, e.g. after the note
    /// itself was deleted. Returns `true` if a lane changed.
    pub fn forget_note(&mut self, note_id: &str) -> bool {
        if self.take_note(note_id) {
            self.commit("forget", note_id);
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Apply an action record.
    ///
    /// `source` resolves the implicit note of an `attach` without `note_id`.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying operation returns.
    pub fn dispatch<S>(&mut self, action: Action, source: &S) -> Result<()>
    where
        S: NoteSource + ?Sized,
    {
        debug!(action = action.name(), "dispatching");
        match action {
            Action::Create { name, notes } => {
                self.create_lane(NewLane { name, notes });
                Ok(())
            }
            Action::Update { id, name } => self.rename_lane(&id, &name),
            Action::Delete { id } => self.delete_lane(&id).map(drop),
            Action::Attach {
                lane_id,
                note_id: Some(note_id),
            } => self.attach_note(&lane_id, &note_id),
            Action::Attach {
                lane_id,
                note_id: None,
            } => self.attach_latest_note(&lane_id, source).map(drop),
            Action::Detach { lane_id, note_id } => self.detach_note(&lane_id, &note_id),
            Action::MoveNote {
                source_id,
                target_id,
            } => self.move_note(&source_id, &target_id),
            Action::MoveLane {
                source_id,
                target_id,
            } => self.move_lane(&source_id, &target_id),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All lanes in display order.
    #[must_use]
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    #[must_use]
    pub fn lane(&self, id: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.id == id)
    }

    /// Index of a lane, logging a warning when it is missing.
    #[must_use]
    pub fn find_lane(&self, id: &str) -> Option<usize> {
        let index = self.lanes.iter().position(|l| l.id == id);
        if index.is_none() {
            warn!(lane_id = id, lanes = self.lanes.len(), "failed to find lane");
        }
        index
    }

    /// The lane currently holding a note.
    #[must_use]
    pub fn lane_of(&self, note_id: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.contains(note_id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Copy of the lane sequence, the unit of serialization.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Lane> {
        self.lanes.clone()
    }

    /// Replace the whole board with a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` if the lanes violate board invariants;
    /// the current state is kept.
    pub fn restore(&mut self, lanes: Vec<Lane>) -> Result<()> {
        if let Err(errors) = SnapshotValidator::validate(&lanes) {
            warn!(errors = errors.len(), "rejected invalid snapshot");
            return Err(LaneError::InvalidSnapshot { errors });
        }
        self.lanes = lanes;
        self.commit("restore", "*");
        Ok(())
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn require_lane(&self, id: &str) -> Result<usize> {
        self.find_lane(id)
            .ok_or_else(|| LaneError::lane_not_found(id))
    }

    /// Lane index and position of a note; first lane wins.
    fn locate_note(&self, note_id: &str) -> Option<(usize, usize)> {
        self.lanes
            .iter()
            .enumerate()
            .find_map(|(li, lane)| lane.position_of(note_id).map(|ni| (li, ni)))
    }

    fn require_note(&self, note_id: &str) -> Result<(usize, usize)> {
        self.locate_note(note_id).ok_or_else(|| {
            warn!(note_id, "failed to find note in any lane");
            LaneError::note_not_found(note_id)
        })
    }

    /// Remove a note from the lane holding it without notifying.
    fn take_note(&mut self, note_id: &str) -> bool {
        match self.locate_note(note_id) {
            Some((li, ni)) => {
                self.lanes[li].notes.remove(ni);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, action: &str, subject: &str) {
        self.dirty = true;
        debug!(action, subject, lanes = self.lanes.len(), "board updated");
        for (_, listener) in &mut self.listeners {
            listener(&self.lanes);
        }
    }
}
