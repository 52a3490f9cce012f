//! Volume helpers
//!
//! Volume is linear in 0.0..=1.0, matching what media elements accept.

use serde::{Deserialize, Serialize};

/// Clamp a requested volume into 0.0..=1.0
///
/// Returns `None` for NaN so a bad slider value never reaches the device.
pub fn clamp_volume(volume: f64) -> Option<f64> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}

/// Coarse loudness bucket shown next to the volume slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

impl VolumeLevel {
    /// Classify a volume in 0.0..=1.0
    pub fn from_volume(volume: f64) -> Self {
        if volume <= 0.0 {
            Self::Muted
        } else if volume < 0.5 {
            Self::Low
        } else {
            Self::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps() {
        assert_eq!(clamp_volume(-0.2), Some(0.0));
        assert_eq!(clamp_volume(0.3), Some(0.3));
        assert_eq!(clamp_volume(1.7), Some(1.0));
        assert_eq!(clamp_volume(f64::NAN), None);
    }

    #[test]
    fn levels() {
        assert_eq!(VolumeLevel::from_volume(0.0), VolumeLevel::Muted);
        assert_eq!(VolumeLevel::from_volume(0.01), VolumeLevel::Low);
        assert_eq!(VolumeLevel::from_volume(0.49), VolumeLevel::Low);
        assert_eq!(VolumeLevel::from_volume(0.5), VolumeLevel::High);
        assert_eq!(VolumeLevel::from_volume(1.0), VolumeLevel::High);
    }
}
