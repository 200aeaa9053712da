//! Action enum — all user-initiated intents.

use moodfm_core::mood::Mood;
use moodfm_core::track::Track;

/// Unique identifier for a focusable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    MoodList,
    TrackList,
    FavoritesPanel,
}

/// All actions that can flow through the app.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Fetching ─────────────────────────────────────────────────────────────
    Fetch(Mood),

    // ── Tracks ───────────────────────────────────────────────────────────────
    Play(Track),
    AddFavorite(Track),

    // ── Favorites ────────────────────────────────────────────────────────────
    RemoveFavorite(usize),
    SortFavorites,
    ShuffleFavorites,

    // ── Navigation ───────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusPane(ComponentId),

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
