//! Persisted user preferences
//!
//! Only the light/dark theme is persisted. It is not part of playback
//! correctness; the player reads it once at startup and writes it on toggle.

use crate::traits::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Preference key for the UI theme
pub const THEME_KEY: &str = "theme";

/// UI colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background (default)
    #[default]
    Dark,
    /// Light background
    Light,
}

impl Theme {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Load the theme from a preference store
    ///
    /// Missing or unrecognised values fall back to [`Theme::Dark`].
    pub fn load(store: &dyn PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Some(value) => Self::from_str(&value).unwrap_or_else(|| {
                debug!(value = %value, "Ignoring unrecognised stored theme");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Persist the theme to a preference store
    pub fn save(self, store: &mut dyn PreferenceStore) {
        store.set(THEME_KEY, self.as_str());
    }
}

/// In-memory preference store
///
/// Used for headless embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
