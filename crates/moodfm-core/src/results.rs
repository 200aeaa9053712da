//! ResultStore — cross-thread hand-off of the latest fetched track list.

use std::sync::Mutex;

use crate::track::Track;

/// Holds the most recent completed fetch result.
///
/// The list is only ever replaced as a whole unit, never mutated in place,
/// so a reader can never observe a partially written set. Readers take a
/// cloned snapshot; both sides hold the lock only for the swap/clone.
#[derive(Debug, Default)]
pub struct ResultStore {
    tracks: Mutex<Vec<Track>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly fetched set, discarding the previous one.
    /// Called only from the coordinator's background task.
    pub fn replace(&self, tracks: Vec<Track>) {
        *self.tracks.lock().unwrap() = tracks;
    }

    /// Cloned view of the current set.
    pub fn snapshot(&self) -> Vec<Track> {
        self.tracks.lock().unwrap().clone()
    }
}
