//! Playback controller
//!
//! Owns the discrete playback state: which track of the catalog is current,
//! whether playback is wanted, and the shuffle/repeat policy. Every command
//! returns a [`Transition`] describing the side effect on the audio output;
//! the controller itself never touches the device and never reads time.

use crate::shuffle::{pick_any, pick_excluding};
use crate::types::{PlaybackConfig, PlaybackState};
use pulse_core::{Catalog, RepeatMode, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Side effect requested by a controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to do
    None,
    /// Resume the loaded source
    Play,
    /// Pause the loaded source
    Pause,
    /// Rewind the loaded source to 0, playing if `is_playing`
    Restart,
    /// Load the track at `index`, playing if `is_playing`
    Load { index: usize },
    /// Playback ran off the end of the catalog
    Stop,
    /// The catalog is empty; drop the loaded source
    Unload,
}

/// State machine over [`PlaybackState`]
#[derive(Debug, Clone)]
pub struct PlaybackController {
    catalog: Catalog,
    current_index: Option<usize>,
    is_playing: bool,
    shuffle: bool,
    repeat: RepeatMode,
    rng: StdRng,
}

impl PlaybackController {
    /// Create a controller with an empty catalog
    pub fn new(config: &PlaybackConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog: Catalog::empty(),
            current_index: None,
            is_playing: false,
            shuffle: config.shuffle,
            repeat: config.repeat,
            rng,
        }
    }

    // ===== Catalog =====

    /// Swap in a freshly fetched catalog
    ///
    /// Indices into the old catalog are meaningless afterwards, so the
    /// position resets to the first track and playback pauses.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> Transition {
        self.catalog = catalog;
        self.is_playing = false;

        if self.catalog.is_empty() {
            self.current_index = None;
            Transition::Unload
        } else {
            self.current_index = Some(0);
            Transition::Load { index: 0 }
        }
    }

    // ===== Playback Control =====

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) -> Transition {
        if self.current_index.is_none() {
            return Transition::None;
        }

        self.is_playing = !self.is_playing;
        if self.is_playing {
            Transition::Play
        } else {
            Transition::Pause
        }
    }

    /// Make the track at `index` current
    ///
    /// Out-of-range indices and the already-current index are ignored.
    /// `is_playing` is left as is.
    pub fn select(&mut self, index: usize) -> Transition {
        if !self.catalog.contains_index(index) || self.current_index == Some(index) {
            return Transition::None;
        }

        self.move_to(index)
    }

    /// Advance according to repeat and shuffle policy
    ///
    /// Also used when the current track ends on its own.
    pub fn next(&mut self) -> Transition {
        let Some(current) = self.current_index else {
            return Transition::None;
        };

        if self.repeat == RepeatMode::One {
            self.is_playing = true;
            return Transition::Restart;
        }

        if self.shuffle {
            return match pick_excluding(&mut self.rng, self.catalog.len(), current) {
                Some(index) => self.move_to(index),
                // Single track: nothing else to pick
                None => Transition::Restart,
            };
        }

        if Some(current) == self.catalog.last_index() {
            if self.repeat == RepeatMode::All {
                self.move_to(0)
            } else {
                self.is_playing = false;
                Transition::Stop
            }
        } else {
            self.move_to(current + 1)
        }
    }

    /// Step back, or jump to a random track in shuffle mode
    ///
    /// In shuffle mode the random pick may land on the current track, in
    /// which case nothing changes.
    pub fn previous(&mut self) -> Transition {
        let Some(current) = self.current_index else {
            return Transition::None;
        };

        let target = if self.shuffle {
            pick_any(&mut self.rng, self.catalog.len())
        } else if current == 0 {
            self.catalog.last_index()
        } else {
            Some(current - 1)
        };

        match target {
            Some(index) if index != current => self.move_to(index),
            _ => Transition::None,
        }
    }

    fn move_to(&mut self, index: usize) -> Transition {
        if self.current_index == Some(index) {
            return Transition::Restart;
        }
        self.current_index = Some(index);
        Transition::Load { index }
    }

    // ===== Shuffle & Repeat =====

    /// Enable or disable shuffle
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle = enabled;
    }

    /// Flip shuffle, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Set repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Advance repeat mode off -> one -> all -> off, returning the new mode
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.repeat
    }

    // ===== State Queries =====

    /// Snapshot of the discrete playback state
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            is_playing: self.is_playing,
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    /// Active catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of the current track
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Current track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|i| self.catalog.get(i))
    }

    /// Whether playback is wanted
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether shuffle is enabled
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
