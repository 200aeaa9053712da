use serde::{Deserialize, Serialize};

/// A single suggested track.
///
/// Equality is structural on (title, artist) and is what the favorites list
/// dedups on. The derived `Ord` compares title first, then artist, which is
/// the ascending order the favorites sort uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Last.fm track page, handed to the browser by the play action.
    pub fn page_url(&self) -> String {
        format!("https://www.last.fm/music/{}/_/{}", self.artist, self.title)
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title, self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_is_title_then_artist() {
        let mut tracks = vec![
            Track::new("B", "x"),
            Track::new("A", "y"),
            Track::new("A", "x"),
        ];
        tracks.sort();
        assert_eq!(
            tracks,
            vec![
                Track::new("A", "x"),
                Track::new("A", "y"),
                Track::new("B", "x"),
            ]
        );
    }

    #[test]
    fn test_page_url() {
        let t = Track::new("Hey Jude", "The Beatles");
        assert_eq!(
            t.page_url(),
            "https://www.last.fm/music/The Beatles/_/Hey Jude"
        );
    }
}
