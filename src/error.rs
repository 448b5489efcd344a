use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Network error: {0}")]
    #[diagnostic(code(chapter_events::network))]
    Network(String),

    #[error("Calendar API error: {0}")]
    #[diagnostic(code(chapter_events::api))]
    Api(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(chapter_events::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(chapter_events::config))]
    Config(String),

    #[error("Storage error: {0}")]
    #[diagnostic(code(chapter_events::storage))]
    Storage(String),

    #[error("Notification error: {0}")]
    #[diagnostic(code(chapter_events::notification))]
    Notification(String),

    #[error(transparent)]
    #[diagnostic(code(chapter_events::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(chapter_events::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(chapter_events::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create network errors
pub fn network_error(message: &str) -> Error {
    Error::Network(message.to_string())
}

/// Helper to create calendar API errors
pub fn api_error(message: &str) -> Error {
    Error::Api(message.to_string())
}

/// Helper to create storage errors
pub fn storage_error(message: &str) -> Error {
    Error::Storage(message.to_string())
}

/// Helper to create notification errors
pub fn notification_error(message: &str) -> Error {
    Error::Notification(message.to_string())
}
