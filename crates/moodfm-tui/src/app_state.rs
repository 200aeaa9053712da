//! AppState — shared read-only data passed to all panes during render/event.
//!
//! Panes read this for data they don't own, but never mutate it. The App
//! event-loop is the only writer.

use moodfm_core::mood::Mood;
use moodfm_core::track::Track;

pub struct AppState {
    /// The mood currently held by the selector (mirrors `MoodSelector::get`).
    pub selected_mood: Option<Mood>,
    /// True between a started fetch and the tick that collected its result.
    pub fetching: bool,
    /// Snapshot of the latest completed fetch.
    pub results: Vec<Track>,
    /// Mirror of the favorites store, for rendering and the ♥ markers.
    pub favorites: Vec<Track>,
}

impl AppState {
    pub fn new(favorites: Vec<Track>) -> Self {
        Self {
            selected_mood: None,
            fetching: false,
            results: Vec::new(),
            favorites,
        }
    }

    /// Whether an equal track is already in the favorites list.
    pub fn is_favorite(&self, track: &Track) -> bool {
        self.favorites.contains(track)
    }
}
