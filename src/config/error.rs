//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host/port combination: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid session cookie name: {0:?}")]
    InvalidCookieName(String),

    #[error("Session TTL must be greater than zero")]
    InvalidSessionTtl,

    #[error("Session TTL {ttl_secs}s exceeds the maximum of {max_secs}s")]
    SessionTtlTooLong { ttl_secs: u64, max_secs: u64 },

    #[error("Scoring threshold {threshold} must be between 1 and {question_count}")]
    InvalidThreshold {
        threshold: usize,
        question_count: usize,
    },
}
