//! Centralized error types for the Pogoda backend.
//!
//! The suggestion path itself has no failure modes; the errors here cover
//! the startup boundary (configuration and filesystem), where a precise
//! message decides whether the operator can fix the problem.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns an operator-friendly message for startup diagnostics.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::Io(_) => "A file operation failed while loading configuration.",
        }
    }
}
