//! Pulse Player
//!
//! Wires search and playback into one player that a UI shell can embed.
//!
//! # Features
//!
//! - **Store**: [`PlayerStore`] owns every piece of player state and is
//!   driven purely by [`PlayerMessage`]s
//! - **Session**: [`PlayerSession`] runs a store on a tokio task, owning the
//!   debounce timer and in-flight catalog requests
//! - **Snapshots**: [`PlayerSnapshot`] is the render-ready state published
//!   after every message
//! - **Configuration**: [`PlayerConfig`] loads from TOML and `PULSE_*`
//!   environment variables
//!
//! # Example
//!
//! ```ignore
//! use pulse_core::MemoryPreferenceStore;
//! use pulse_player::{PlayerCommand, PlayerConfig, PlayerSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlayerConfig::load(None)?;
//!     let output = MyAudioElement::new();
//!     let session = PlayerSession::connect(&config, output, MemoryPreferenceStore::new())?;
//!
//!     session.input("lofi")?;
//!     session.command(PlayerCommand::TogglePlay)?;
//!
//!     let mut updates = session.subscribe();
//!     while updates.changed().await.is_ok() {
//!         let snapshot = updates.borrow().clone();
//!         println!("{} {}", snapshot.formatted_time, snapshot.formatted_duration);
//!     }
//!
//!     session.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
mod session;
mod snapshot;
mod store;

pub use config::{PlaybackSettings, PlayerConfig, SearchSettings};
pub use error::{ConfigError, PlayerError, Result};
pub use session::{PlayerHandle, PlayerSession};
pub use snapshot::PlayerSnapshot;
pub use store::{Effect, PlayerCommand, PlayerMessage, PlayerStore};
