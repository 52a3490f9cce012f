//! Transport telemetry
//!
//! Continuously updating state fed by the output device: position, duration
//! and volume. Only events from the current source reach this struct; the
//! manager filters stale ones by [`SourceId`](crate::SourceId).

use crate::time::format_time;
use crate::volume::{clamp_volume, VolumeLevel};
use serde::{Deserialize, Serialize};

/// Position, duration and volume of the loaded source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportState {
    /// Playback position in seconds, always >= 0
    current_time: f64,

    /// Source duration in seconds; `None` until metadata arrives or when the
    /// source reports a non-finite duration
    duration: Option<f64>,

    /// Output volume in 0.0..=1.0
    volume: f64,
}

impl TransportState {
    /// Create transport state with the given initial volume
    pub fn new(volume: f64) -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            volume: clamp_volume(volume).unwrap_or(0.5),
        }
    }

    /// Forget position and duration of the previous source
    pub fn reset_for_new_source(&mut self) {
        self.current_time = 0.0;
        self.duration = None;
    }

    /// Apply a `timeUpdate` from the device
    pub fn on_time_update(&mut self, seconds: f64) {
        if seconds.is_nan() {
            return;
        }
        self.current_time = self.clamp_position(seconds);
    }

    /// Apply a `loadedMetadata` from the device
    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.duration = (duration.is_finite() && duration >= 0.0).then_some(duration);
        if let Some(duration) = self.duration {
            self.current_time = self.current_time.min(duration);
        }
    }

    /// Record an optimistic seek, returning the clamped target
    ///
    /// Returns `None` for NaN so nothing is sent to the device.
    pub fn seek(&mut self, seconds: f64) -> Option<f64> {
        if seconds.is_nan() {
            return None;
        }
        let target = self.clamp_position(seconds);
        self.current_time = target;
        Some(target)
    }

    /// Resolve a fraction of the duration to seconds
    ///
    /// `None` while the duration is unknown.
    pub fn position_at_percent(&self, fraction: f64) -> Option<f64> {
        if fraction.is_nan() {
            return None;
        }
        self.duration.map(|d| d * fraction.clamp(0.0, 1.0))
    }

    /// Store a new volume, returning the clamped value
    pub fn set_volume(&mut self, volume: f64) -> Option<f64> {
        let volume = clamp_volume(volume)?;
        self.volume = volume;
        Some(volume)
    }

    fn clamp_position(&self, seconds: f64) -> f64 {
        let seconds = seconds.max(0.0);
        match self.duration {
            Some(duration) => seconds.min(duration),
            None => seconds,
        }
    }

    // ===== Queries =====

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_volume(self.volume)
    }

    /// Fraction of the source played, in 0.0..=1.0
    pub fn progress(&self) -> Option<f64> {
        match self.duration {
            Some(duration) if duration > 0.0 => {
                Some((self.current_time / duration).clamp(0.0, 1.0))
            }
            Some(_) => Some(0.0),
            None => None,
        }
    }

    /// Position as `mm:ss`
    pub fn formatted_time(&self) -> String {
        format_time(self.current_time)
    }

    /// Duration as `mm:ss`, `"00:00"` while unknown
    pub fn formatted_duration(&self) -> String {
        format_time(self.duration.unwrap_or(0.0))
    }
}

impl Default for TransportState {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_volume() {
        assert_eq!(TransportState::new(3.0).volume(), 1.0);
        assert_eq!(TransportState::new(f64::NAN).volume(), 0.5);
        assert_eq!(TransportState::default().volume_level(), VolumeLevel::High);
    }

    #[test]
    fn time_update_is_clamped_to_duration() {
        let mut transport = TransportState::default();
        transport.on_time_update(500.0);
        assert_eq!(transport.current_time(), 500.0);

        transport.on_loaded_metadata(180.0);
        assert_eq!(transport.current_time(), 180.0);

        transport.on_time_update(-3.0);
        assert_eq!(transport.current_time(), 0.0);

        transport.on_time_update(f64::NAN);
        assert_eq!(transport.current_time(), 0.0);
    }

    #[test]
    fn non_finite_duration_is_unknown() {
        let mut transport = TransportState::default();
        transport.on_loaded_metadata(f64::INFINITY);
        assert_eq!(transport.duration(), None);
        transport.on_loaded_metadata(f64::NAN);
        assert_eq!(transport.duration(), None);
        assert_eq!(transport.progress(), None);
        assert_eq!(transport.formatted_duration(), "00:00");
    }

    #[test]
    fn reset_clears_position_and_duration() {
        let mut transport = TransportState::new(0.2);
        transport.on_loaded_metadata(30.0);
        transport.on_time_update(12.0);

        transport.reset_for_new_source();

        assert_eq!(transport.current_time(), 0.0);
        assert_eq!(transport.duration(), None);
        assert_eq!(transport.volume(), 0.2);
    }

    #[test]
    fn seek_clamps() {
        let mut transport = TransportState::default();
        transport.on_loaded_metadata(30.0);

        assert_eq!(transport.seek(12.5), Some(12.5));
        assert_eq!(transport.seek(99.0), Some(30.0));
        assert_eq!(transport.seek(-1.0), Some(0.0));
        assert_eq!(transport.seek(f64::NAN), None);
        assert_eq!(transport.current_time(), 0.0);
    }

    #[test]
    fn percent_needs_duration() {
        let mut transport = TransportState::default();
        assert_eq!(transport.position_at_percent(0.5), None);

        transport.on_loaded_metadata(200.0);
        assert_eq!(transport.position_at_percent(0.25), Some(50.0));
        assert_eq!(transport.position_at_percent(2.0), Some(200.0));
    }

    #[test]
    fn volume_rejects_nan() {
        let mut transport = TransportState::default();
        assert_eq!(transport.set_volume(0.0), Some(0.0));
        assert_eq!(transport.volume_level(), VolumeLevel::Muted);
        assert_eq!(transport.set_volume(f64::NAN), None);
        assert_eq!(transport.volume(), 0.0);
    }

    #[test]
    fn progress_and_formatting() {
        let mut transport = TransportState::default();
        transport.on_loaded_metadata(120.0);
        transport.on_time_update(65.0);

        assert_eq!(transport.formatted_time(), "01:05");
        assert_eq!(transport.formatted_duration(), "02:00");
        let progress = transport.progress().unwrap();
        assert!((progress - 65.0 / 120.0).abs() < 1e-9);
    }
}
