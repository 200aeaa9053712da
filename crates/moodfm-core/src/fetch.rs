//! Last.fm fetch client — the external track source behind the coordinator.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use crate::mood::Mood;
use crate::track::Track;

/// What a fetch attempt can fail with. Every variant is caught at the
/// coordinator's task boundary and degraded to an empty result set.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce the top tracks for a mood.
///
/// The coordinator calls this exactly once per started fetch and does not
/// retry. Tests inject gated or failing sources through this seam.
pub trait TrackSource: Send + Sync + 'static {
    fn top_tracks(
        &self,
        mood: Mood,
    ) -> impl Future<Output = Result<Vec<Track>, FetchError>> + Send;
}

/// Last.fm `tag.gettoptracks` client.
pub struct LastfmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LastfmClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("moodfm/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl TrackSource for LastfmClient {
    async fn top_tracks(&self, mood: Mood) -> Result<Vec<Track>, FetchError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("method", "tag.gettoptracks"),
                ("tag", mood.tag()),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await?;
        parse_top_tracks(&body)
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

/// Intermediate structs matching the `tag.gettoptracks` JSON shape. Kept
/// separate from `Track` so the wire schema can change without touching the
/// domain type.
#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    tracks: TrackList,
}

#[derive(Debug, Deserialize)]
struct TrackList {
    #[serde(default)]
    track: Vec<WireTrack>,
}

#[derive(Debug, Deserialize)]
struct WireTrack {
    name: String,
    artist: WireArtist,
}

#[derive(Debug, Deserialize)]
struct WireArtist {
    name: String,
}

/// Decode a `tag.gettoptracks` response body into tracks, in response order.
pub fn parse_top_tracks(body: &str) -> Result<Vec<Track>, FetchError> {
    let resp: TopTracksResponse = serde_json::from_str(body)?;
    Ok(resp
        .tracks
        .track
        .into_iter()
        .map(|t| Track {
            title: t.name,
            artist: t.artist.name,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_tracks_in_response_order() {
        let body = r#"{
            "tracks": {
                "track": [
                    {"name": "Hey Jude", "artist": {"name": "The Beatles"},
                     "url": "https://www.last.fm/music/The+Beatles/_/Hey+Jude"},
                    {"name": "Karma Police", "artist": {"name": "Radiohead"}}
                ],
                "@attr": {"tag": "sad", "page": "1"}
            }
        }"#;
        let tracks = parse_top_tracks(body).unwrap();
        assert_eq!(
            tracks,
            vec![
                Track::new("Hey Jude", "The Beatles"),
                Track::new("Karma Police", "Radiohead"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_track_array() {
        let tracks = parse_top_tracks(r#"{"tracks": {"track": []}}"#).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_parse_missing_track_field_defaults_empty() {
        let tracks = parse_top_tracks(r#"{"tracks": {}}"#).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_parse_error_body_is_parse_error() {
        // The API reports errors as {"error": N, "message": "…"}, which does
        // not match the expected shape.
        let err = parse_top_tracks(r#"{"error": 6, "message": "Invalid parameters"}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let err = parse_top_tracks("not json at all").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
