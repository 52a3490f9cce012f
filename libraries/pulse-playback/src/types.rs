//! Core types for playback management

use pulse_core::RepeatMode;
use serde::{Deserialize, Serialize};

/// Discrete playback position and policy
///
/// `current_index` is `None` exactly when the catalog is empty; otherwise it
/// always refers to a track of the current catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Index of the current track in the catalog
    pub current_index: Option<usize>,

    /// Whether the user wants audio to be playing
    pub is_playing: bool,

    /// Random next/previous selection
    pub shuffle: bool,

    /// Repeat policy
    pub repeat: RepeatMode,
}

/// Configuration for playback manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 0.5)
    pub volume: f64,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Seed for shuffle selection (default: entropy)
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            shuffle: false,
            repeat: RepeatMode::Off,
            shuffle_seed: None,
        }
    }
}
