//! FavoritesStore — the user-curated track list and its on-disk codec.
//!
//! One record per line, `"<title> | <artist>"`, UTF-8, no escaping. Lines
//! without the separator are skipped on load; a missing file is an empty
//! list. Every mutation persists synchronously before returning, so memory
//! and disk agree whenever a call returns. A failed write is logged and the
//! in-memory list stays authoritative for the session.

use std::path::PathBuf;

use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::track::Track;

/// Field separator in the favorites file. The format does not escape it, so
/// a title containing the literal separator corrupts its own line on reload.
const SEPARATOR: &str = " | ";

#[derive(Debug)]
pub struct FavoritesStore {
    tracks: Vec<Track>,
    path: PathBuf,
}

impl FavoritesStore {
    /// Read the backing file, skipping malformed lines. A missing file
    /// leaves the list empty. Called once at startup.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tracks = match std::fs::read_to_string(&path) {
            Ok(content) => parse_favorites(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("could not read favorites file {}: {}", path.display(), e);
                Vec::new()
            }
        };
        info!("loaded {} favorites from {}", tracks.len(), path.display());
        Self { tracks, path }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Append `track` unless an equal one is already present.
    /// Returns whether the list changed (and was persisted).
    pub fn add(&mut self, track: Track) -> bool {
        if self.tracks.contains(&track) {
            return false;
        }
        self.tracks.push(track);
        self.persist();
        true
    }

    /// Remove the track at `index`.
    ///
    /// Panics if `index` is out of bounds — callers index into the same list
    /// they just rendered, so an out-of-range index is a caller bug.
    pub fn remove(&mut self, index: usize) {
        self.tracks.remove(index);
        self.persist();
    }

    /// Randomly permute the list.
    pub fn shuffle(&mut self) {
        self.tracks.shuffle(&mut rand::thread_rng());
        self.persist();
    }

    /// Sort ascending by (title, artist).
    pub fn sort(&mut self) {
        self.tracks.sort();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.write_file() {
            warn!(
                "could not write favorites file {}: {}",
                self.path.display(),
                e
            );
        }
    }

    fn write_file(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = String::new();
        for track in &self.tracks {
            out.push_str(&track.title);
            out.push_str(SEPARATOR);
            out.push_str(&track.artist);
            out.push('\n');
        }
        std::fs::write(&self.path, out)
    }
}

fn parse_favorites(content: &str) -> Vec<Track> {
    content
        .lines()
        .filter_map(|line| {
            let (title, artist) = line.split_once(SEPARATOR)?;
            Some(Track::new(title, artist))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::load(dir.path().join("favorites.txt"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let favs = store_in(&dir);
        assert!(favs.is_empty());
    }

    #[test]
    fn test_add_dedups_on_structural_equality() {
        let dir = tempfile::tempdir().unwrap();
        let mut favs = store_in(&dir);

        assert!(favs.add(Track::new("Hey Jude", "The Beatles")));
        assert!(!favs.add(Track::new("Hey Jude", "The Beatles")));
        assert_eq!(favs.len(), 1);

        // Same title, different artist is a different track.
        assert!(favs.add(Track::new("Hey Jude", "Wilson Pickett")));
        assert_eq!(favs.len(), 2);
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.txt");

        let mut favs = FavoritesStore::load(&path);
        favs.add(Track::new("Karma Police", "Radiohead"));
        favs.add(Track::new("Alright", "Kendrick Lamar"));
        favs.add(Track::new("Clair de Lune", "Debussy"));

        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.tracks(), favs.tracks());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.txt");
        std::fs::write(&path, "Hey Jude | The Beatles\nno separator here\n").unwrap();

        let favs = FavoritesStore::load(&path);
        assert_eq!(favs.tracks(), &[Track::new("Hey Jude", "The Beatles")]);
    }

    #[test]
    fn test_sort_is_title_then_artist() {
        let dir = tempfile::tempdir().unwrap();
        let mut favs = store_in(&dir);
        favs.add(Track::new("B", "x"));
        favs.add(Track::new("A", "y"));

        favs.sort();
        assert_eq!(favs.tracks(), &[Track::new("A", "y"), Track::new("B", "x")]);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.txt");

        let mut favs = FavoritesStore::load(&path);
        favs.add(Track::new("One", "a"));
        favs.add(Track::new("Two", "b"));
        favs.remove(0);

        assert_eq!(favs.tracks(), &[Track::new("Two", "b")]);
        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.tracks(), &[Track::new("Two", "b")]);
    }

    #[test]
    #[should_panic]
    fn test_remove_out_of_bounds_panics() {
        let dir = tempfile::tempdir().unwrap();
        let mut favs = store_in(&dir);
        favs.add(Track::new("Only", "one"));
        favs.remove(1);
    }

    #[test]
    fn test_shuffle_keeps_the_same_tracks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.txt");

        let mut favs = FavoritesStore::load(&path);
        for i in 0..10 {
            favs.add(Track::new(format!("T{}", i), "artist"));
        }
        let mut before = favs.tracks().to_vec();
        favs.shuffle();
        let mut after = favs.tracks().to_vec();

        before.sort();
        after.sort();
        assert_eq!(before, after);

        // Disk matches memory after the shuffle.
        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.tracks(), favs.tracks());
    }
}
