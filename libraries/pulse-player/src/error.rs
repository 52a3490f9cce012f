/// Player error types
use pulse_search::SearchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlayerError>;

/// Problems with the player configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Search client error: {0}")]
    Search(#[from] SearchError),

    #[error("Player session has shut down")]
    SessionClosed,
}
