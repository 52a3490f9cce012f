/// Player configuration
use crate::error::ConfigError;
use pulse_core::RepeatMode;
use pulse_playback::PlaybackConfig;
use pulse_search::{SearchConfig, DEFAULT_API_HOST, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_search")]
    pub search: SearchSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_host")]
    pub api_host: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Query fetched when the player mounts
    #[serde(default = "default_query")]
    pub default_query: String,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: f64,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default = "default_repeat")]
    pub repeat: RepeatMode,

    /// Fixed seed for shuffle picks; entropy when unset
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl PlayerConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables use the `PULSE_` prefix and `__` between
    /// sections, e.g. `PULSE_SEARCH__API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(path, environment())
    }

    fn from_sources(path: Option<&Path>, env: config::Environment) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(env);

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.search.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "search.base_url must be an http(s) URL, got {:?}",
                self.search.base_url
            )));
        }

        if self.search.debounce_ms == 0 {
            return Err(ConfigError::Invalid(
                "search.debounce_ms must be greater than 0".to_string(),
            ));
        }

        if self.search.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "search.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(ConfigError::Invalid(format!(
                "playback.volume must be within 0.0..=1.0, got {}",
                self.playback.volume
            )));
        }

        Ok(())
    }

    /// Settings for the HTTP search client
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            base_url: self.search.base_url.clone(),
            api_host: self.search.api_host.clone(),
            api_key: self.search.api_key.clone(),
            timeout: self.fetch_timeout(),
        }
    }

    /// Settings for the playback manager
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            volume: self.playback.volume,
            shuffle: self.playback.shuffle,
            repeat: self.playback.repeat,
            shuffle_seed: self.playback.shuffle_seed,
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.search.timeout_secs)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("PULSE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_search() -> SearchSettings {
    SearchSettings {
        base_url: default_base_url(),
        api_host: default_api_host(),
        api_key: None,
        default_query: default_query(),
        debounce_ms: default_debounce_ms(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_query() -> String {
    "arijit".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        volume: default_volume(),
        shuffle: false,
        repeat: default_repeat(),
        shuffle_seed: None,
    }
}

fn default_volume() -> f64 {
    0.5
}

fn default_repeat() -> RepeatMode {
    RepeatMode::Off
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            search: default_search(),
            playback: default_playback(),
        }
    }
}
