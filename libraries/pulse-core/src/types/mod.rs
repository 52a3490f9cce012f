mod catalog;
mod playback_state;
mod track;

pub use catalog::Catalog;
pub use playback_state::RepeatMode;
pub use track::{AccentTheme, Track, TrackId};
