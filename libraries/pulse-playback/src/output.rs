//! Audio output abstraction
//!
//! The player drives exactly one output device (a browser `<audio>` element,
//! a native sink, ...). Every load mints a new [`SourceId`]; the device tags
//! the events it reports with the id of the load that produced them, so
//! events from a replaced source can be recognised and dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Generation number of one load into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(u64);

impl SourceId {
    /// Raw generation number
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// Feedback reported by the output device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutputEvent {
    /// Playback position advanced
    TimeUpdate {
        /// Position in seconds
        #[serde(rename = "currentTime")]
        current_time: f64,
    },
    /// Media metadata became available
    LoadedMetadata {
        /// Track duration in seconds (may be NaN or infinite for streams)
        duration: f64,
    },
    /// The source played to its natural end
    Ended,
}

/// Platform audio output
///
/// Implementors wrap the single device that plays the current track. None of
/// the commands report failure: a device that cannot play simply stays
/// silent and never reports `Ended`.
pub trait AudioOutput: Send {
    /// Replace whatever is loaded with `url`
    ///
    /// Events caused by this load must be reported with `source`.
    fn load(&mut self, source: SourceId, url: &str);

    /// Start or resume playback from the current position
    fn play(&mut self);

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Jump to `seconds` from the start of the source
    fn seek(&mut self, seconds: f64);

    /// Set output volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, volume: f64);
}

/// Owned handle to the output device
///
/// Tracks which load is current. At most one source is considered loaded at
/// any time.
#[derive(Debug)]
pub struct OutputHandle<O> {
    device: O,
    current: Option<SourceId>,
    next_id: u64,
}

impl<O: AudioOutput> OutputHandle<O> {
    /// Wrap a device with nothing loaded
    pub fn new(device: O) -> Self {
        Self {
            device,
            current: None,
            next_id: 1,
        }
    }

    /// Load `url`, superseding the previous source
    pub fn load(&mut self, url: &str) -> SourceId {
        let id = SourceId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.current.replace(id) {
            debug!(previous = %previous, source = %id, "Replacing loaded source");
        }
        self.device.load(id, url);
        id
    }

    /// Pause and forget the current source
    pub fn unload(&mut self) {
        if self.current.take().is_some() {
            self.device.pause();
        }
    }

    /// Start or resume playback
    pub fn play(&mut self) {
        if self.current.is_some() {
            self.device.play();
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.current.is_some() {
            self.device.pause();
        }
    }

    /// Seek within the current source
    pub fn seek(&mut self, seconds: f64) {
        if self.current.is_some() {
            self.device.seek(seconds);
        }
    }

    /// Set output volume
    pub fn set_volume(&mut self, volume: f64) {
        self.device.set_volume(volume);
    }

    /// Currently loaded source
    pub fn current_source(&self) -> Option<SourceId> {
        self.current
    }

    /// Whether events tagged `source` belong to the current load
    pub fn accepts(&self, source: SourceId) -> bool {
        self.current == Some(source)
    }

    /// Borrow the device
    pub fn device(&self) -> &O {
        &self.device
    }

    /// Mutably borrow the device
    pub fn device_mut(&mut self) -> &mut O {
        &mut self.device
    }

    /// Consume the handle, returning the device
    pub fn into_inner(self) -> O {
        self.device
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{Command, RecordingOutput};
    use super::*;

    #[test]
    fn load_mints_increasing_ids() {
        let mut handle = OutputHandle::new(RecordingOutput::default());

        let first = handle.load("a.mp3");
        let second = handle.load("b.mp3");

        assert!(second > first);
        assert!(!handle.accepts(first));
        assert!(handle.accepts(second));
        assert_eq!(handle.current_source(), Some(second));
    }

    #[test]
    fn commands_without_source_are_dropped() {
        let mut handle = OutputHandle::new(RecordingOutput::default());

        handle.play();
        handle.pause();
        handle.seek(10.0);
        handle.unload();

        assert!(handle.device().commands.is_empty());
    }

    #[test]
    fn volume_applies_without_source() {
        let mut handle = OutputHandle::new(RecordingOutput::default());
        handle.set_volume(0.25);
        assert_eq!(handle.device().commands, vec![Command::Volume(0.25)]);
    }

    #[test]
    fn unload_pauses_and_rejects_old_events() {
        let mut handle = OutputHandle::new(RecordingOutput::default());
        let id = handle.load("a.mp3");
        handle.device_mut().take();

        handle.unload();

        assert_eq!(handle.device().commands, vec![Command::Pause]);
        assert!(!handle.accepts(id));
        assert_eq!(handle.current_source(), None);
    }

    #[test]
    fn event_serialization() {
        let json = serde_json::to_value(OutputEvent::TimeUpdate { current_time: 1.5 }).unwrap();
        assert_eq!(json["type"], "timeUpdate");
        assert_eq!(json["currentTime"], 1.5);

        let ended: OutputEvent = serde_json::from_str(r#"{"type":"ended"}"#).unwrap();
        assert_eq!(ended, OutputEvent::Ended);
    }
}
