//! Render-ready view of the player
//!
//! Everything a view needs to draw one frame, cheap to clone (the catalog is
//! shared) and serializable for shells that render outside Rust.

use pulse_core::{Catalog, Theme, Track};
use pulse_playback::{PlaybackState, VolumeLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Text currently in the search box
    pub raw_query: String,
    /// Query the catalog was (or is being) fetched for
    pub effective_query: String,

    /// A fetch is in flight
    pub loading: bool,
    /// Message of the last failed fetch
    pub error: Option<String>,
    /// Active catalog
    pub catalog: Catalog,

    pub playback: PlaybackState,
    pub current_track: Option<Track>,

    /// Position in seconds
    pub current_time: f64,
    /// Duration in seconds, `None` while unknown
    pub duration: Option<f64>,
    /// Played fraction in 0.0..=1.0
    pub progress: Option<f64>,
    pub formatted_time: String,
    pub formatted_duration: String,

    pub volume: f64,
    pub volume_level: VolumeLevel,

    pub theme: Theme,
}
