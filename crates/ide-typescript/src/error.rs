//! Error types for the TypeScript adapter

use thiserror::Error;

/// Adapter result type
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors raised by the adapter and its collaborators
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to spawn language server: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value for setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Invalid process state: {0}")]
    ProcessState(String),

    #[error("Deactivation failed: {0}")]
    Deactivation(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl From<config::ConfigError> for AdapterError {
    fn from(err: config::ConfigError) -> Self {
        AdapterError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::Protocol(err.to_string())
    }
}

impl From<toml::ser::Error> for AdapterError {
    fn from(err: toml::ser::Error) -> Self {
        AdapterError::Config(err.to_string())
    }
}
