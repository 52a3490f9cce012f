//! Pulse Player - Playback Management
//!
//! Platform-agnostic playback control for Pulse Player.
//!
//! This crate provides:
//! - Play/pause, select, next and previous over a fetched [`Catalog`](pulse_core::Catalog)
//! - Shuffle and repeat policy (Off, One, All)
//! - Transport telemetry (position, duration, volume) fed by the output device
//! - Seek by time and by percentage
//! - `mm:ss` time formatting
//!
//! # Architecture
//!
//! `pulse-playback` never performs I/O and never reads a clock:
//! - [`PlaybackController`] is a pure state machine returning [`Transition`]s
//! - [`TransportState`] only changes in response to device events and commands
//! - [`PlaybackManager`] applies transitions to one [`AudioOutput`] device
//!
//! Every load into the device mints a [`SourceId`]. The device reports events
//! tagged with that id, and events from a superseded load are dropped.
//!
//! # Example
//!
//! ```rust
//! use pulse_core::{AccentTheme, Track, TrackId};
//! use pulse_playback::{AudioOutput, PlaybackConfig, PlaybackManager, SourceId};
//!
//! #[derive(Default)]
//! struct SilentOutput;
//!
//! impl AudioOutput for SilentOutput {
//!     fn load(&mut self, _source: SourceId, _url: &str) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _seconds: f64) {}
//!     fn set_volume(&mut self, _volume: f64) {}
//! }
//!
//! let mut manager = PlaybackManager::new(&PlaybackConfig::default(), SilentOutput);
//!
//! let track = Track {
//!     id: TrackId::new("1"),
//!     title: "My Song".to_string(),
//!     artist: "Artist Name".to_string(),
//!     audio_url: "https://cdn.example.com/1.mp3".to_string(),
//!     cover_url: "https://cdn.example.com/1.jpg".to_string(),
//!     accent: AccentTheme::Violet,
//! };
//! manager.replace_catalog(vec![track].into());
//!
//! manager.toggle_play();
//! assert!(manager.is_playing());
//! ```

mod controller;
mod events;
mod manager;
mod output;
mod shuffle;
mod time;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use controller::{PlaybackController, Transition};
pub use events::PlaybackEvent;
pub use manager::PlaybackManager;
pub use output::{AudioOutput, OutputEvent, OutputHandle, SourceId};
pub use time::format_time;
pub use transport::TransportState;
pub use types::{PlaybackConfig, PlaybackState};
pub use volume::{clamp_volume, VolumeLevel};
