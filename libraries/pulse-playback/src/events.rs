//! Playback Events
//!
//! Event-based communication for UI synchronization during playback.
//! Events are queued by [`PlaybackManager`](crate::PlaybackManager) and
//! drained by the embedding shell after each command or device callback.

use pulse_core::{RepeatMode, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// `is_playing` flipped
    StateChanged {
        /// Whether playback is now wanted
        is_playing: bool,
    },

    /// A different track became current
    TrackChanged {
        /// Catalog index of the new track
        index: usize,
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// The current track was rewound to the start (repeat one, single-track
    /// shuffle or repeat all)
    TrackRestarted {
        /// ID of the restarted track
        track_id: TrackId,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// A new catalog replaced the previous one
    CatalogReplaced {
        /// New catalog length
        length: usize,
    },

    /// Position moved by a seek command
    Seeked {
        /// New position in seconds
        position: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0-1.0)
        volume: f64,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// New shuffle state
        enabled: bool,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// New repeat mode
        mode: RepeatMode,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_variant_tag() {
        let event = PlaybackEvent::TrackChanged {
            index: 1,
            track_id: TrackId::new("42"),
            previous_track_id: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["TrackChanged"]["index"], 1);
        assert_eq!(json["TrackChanged"]["track_id"], "42");
        assert!(json["TrackChanged"]["previous_track_id"].is_null());
    }

    #[test]
    fn repeat_mode_serializes_lowercase() {
        let event = PlaybackEvent::RepeatChanged {
            mode: RepeatMode::All,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"RepeatChanged":{"mode":"all"}}"#);
    }
}
