//! Types for the search API requests and responses.

use pulse_core::{AccentTheme, Catalog, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default search service endpoint
pub const DEFAULT_BASE_URL: &str = "https://deezerdevs-deezer.p.rapidapi.com";

/// Default value of the `X-RapidAPI-Host` header
pub const DEFAULT_API_HOST: &str = "deezerdevs-deezer.p.rapidapi.com";

/// Configuration for connecting to the search service.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the service (e.g., "https://deezerdevs-deezer.p.rapidapi.com")
    pub base_url: String,
    /// Value sent as `X-RapidAPI-Host`
    pub api_host: String,
    /// Value sent as `X-RapidAPI-Key` (omitted when `None`)
    pub api_key: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl SearchConfig {
    /// Create a config for `base_url` with default host and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: None,
            timeout: Duration::from_secs(15),
        }
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Body of a search response.
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchResponse {
    pub data: Vec<ApiTrack>,
    /// Total hits reported by the service (not all are returned)
    #[serde(default)]
    pub total: Option<u64>,
}

/// A track record as returned by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTrack {
    pub id: u64,
    pub title: String,
    /// 30 second preview clip
    pub preview: String,
    pub artist: ApiArtist,
    pub album: ApiAlbum,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiAlbum {
    pub cover_medium: String,
}

impl SearchResponse {
    /// Map records to tracks, assigning accents by response position.
    pub fn into_catalog(self) -> Catalog {
        self.data
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_track(position))
            .collect::<Vec<_>>()
            .into()
    }
}

impl ApiTrack {
    fn into_track(self, position: usize) -> Track {
        Track {
            id: TrackId::from(self.id),
            title: self.title,
            artist: self.artist.name,
            audio_url: self.preview,
            cover_url: self.album.cover_medium,
            accent: AccentTheme::for_position(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_records_in_order_with_cycling_accents() {
        let body = serde_json::json!({
            "data": (0..6).map(|i| serde_json::json!({
                "id": 100 + i,
                "title": format!("Song {}", i),
                "preview": format!("https://cdn.example.com/{}.mp3", i),
                "artist": { "name": "Arijit Singh" },
                "album": { "cover_medium": format!("https://cdn.example.com/{}.jpg", i) }
            })).collect::<Vec<_>>(),
            "total": 240
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let catalog = response.into_catalog();

        assert_eq!(catalog.len(), 6);
        let first = catalog.get(0).unwrap();
        assert_eq!(first.id.as_str(), "100");
        assert_eq!(first.artist, "Arijit Singh");
        assert_eq!(first.audio_url, "https://cdn.example.com/0.mp3");
        assert_eq!(first.cover_url, "https://cdn.example.com/0.jpg");
        assert_eq!(first.accent, AccentTheme::Violet);
        assert_eq!(catalog.get(5).unwrap().accent, AccentTheme::Violet);
        assert_eq!(catalog.get(3).unwrap().accent, AccentTheme::Ocean);
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{
            "data": [{
                "id": 1, "title": "T", "preview": "p", "rank": 900000,
                "artist": { "name": "A", "picture": "x" },
                "album": { "cover_medium": "c", "title": "Album" }
            }],
            "next": "https://api.example.com/search?q=a&index=25"
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.total, None);
    }

    #[test]
    fn error_body_without_data_is_rejected() {
        let body = r#"{"error":{"type":"Exception","message":"Quota limit exceeded","code":4}}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}
