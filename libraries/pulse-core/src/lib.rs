//! Pulse Player Core
//!
//! Platform-agnostic domain types shared by the search, playback and player
//! crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Catalog`, `RepeatMode`, `AccentTheme`
//! - **Core Traits**: `PreferenceStore`
//! - **Preferences**: the persisted light/dark `Theme`
//!
//! # Example
//!
//! ```rust
//! use pulse_core::{AccentTheme, Catalog, Track, TrackId};
//!
//! let track = Track {
//!     id: TrackId::new("3135556"),
//!     title: "Harder, Better, Faster, Stronger".to_string(),
//!     artist: "Daft Punk".to_string(),
//!     audio_url: "https://cdn.example.com/preview.mp3".to_string(),
//!     cover_url: "https://cdn.example.com/cover.jpg".to_string(),
//!     accent: AccentTheme::for_position(0),
//! };
//!
//! let catalog = Catalog::new(vec![track]);
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.last_index(), Some(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod preferences;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use preferences::{MemoryPreferenceStore, Theme, THEME_KEY};
pub use traits::PreferenceStore;
pub use types::{AccentTheme, Catalog, RepeatMode, Track, TrackId};
