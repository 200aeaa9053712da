//! Mood — the query key for a fetch, plus its cross-thread selector.

use std::sync::atomic::{AtomicI8, Ordering};

/// The selectable moods, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Relaxed,
    Energetic,
    Chill,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Relaxed,
        Mood::Energetic,
        Mood::Chill,
        Mood::Excited,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Relaxed => "Relaxed",
            Self::Energetic => "Energetic",
            Self::Chill => "Chill",
            Self::Excited => "Excited",
        }
    }

    /// The tag value sent to the API.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Relaxed => "relaxed",
            Self::Energetic => "energetic",
            Self::Chill => "chill",
            Self::Excited => "excited",
        }
    }

    fn index(self) -> i8 {
        self as i8
    }

    fn from_index(i: i8) -> Option<Mood> {
        Self::ALL.get(usize::try_from(i).ok()?).copied()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const UNSET: i8 = -1;

/// Holds the user's current mood choice.
///
/// Written only by the control thread; readable from any thread without a
/// lock. A fetch task captures the mood value at spawn time, so a later
/// `set` never affects an in-flight fetch.
#[derive(Debug)]
pub struct MoodSelector {
    current: AtomicI8,
}

impl MoodSelector {
    pub fn new() -> Self {
        Self {
            current: AtomicI8::new(UNSET),
        }
    }

    pub fn get(&self) -> Option<Mood> {
        Mood::from_index(self.current.load(Ordering::Relaxed))
    }

    pub fn set(&self, mood: Option<Mood>) {
        let raw = mood.map(Mood::index).unwrap_or(UNSET);
        self.current.store(raw, Ordering::Relaxed);
    }
}

impl Default for MoodSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_starts_unset() {
        let sel = MoodSelector::new();
        assert_eq!(sel.get(), None);
    }

    #[test]
    fn test_selector_roundtrip() {
        let sel = MoodSelector::new();
        for mood in Mood::ALL {
            sel.set(Some(mood));
            assert_eq!(sel.get(), Some(mood));
        }
        sel.set(None);
        assert_eq!(sel.get(), None);
    }

    #[test]
    fn test_tag_is_lowercase_label() {
        for mood in Mood::ALL {
            assert_eq!(mood.tag(), mood.label().to_lowercase());
        }
    }
}
