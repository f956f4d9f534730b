//! Session configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Longest accepted session lifetime: ten years.
pub const MAX_SESSION_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Where in-progress answers are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Memory,
    File,
}

/// Session cookie and storage settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime in seconds, refreshed on every answer
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Directory for the file backend
    pub storage_dir: Option<PathBuf>,

    /// Mark the cookie `Secure`
    #[serde(default)]
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Cookies are always `Secure` in production.
    pub fn secure_cookie_for(&self, environment: &Environment) -> bool {
        self.secure_cookie || *environment == Environment::Production
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let valid_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if !valid_name {
            return Err(ValidationError::InvalidCookieName(self.cookie_name.clone()));
        }
        if self.ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ValidationError::SessionTtlTooLong {
                ttl_secs: self.ttl_secs,
                max_secs: MAX_SESSION_TTL_SECS,
            });
        }
        if self.backend == SessionBackend::File && self.storage_dir.is_none() {
            return Err(ValidationError::MissingRequired("session.storage_dir"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            cookie_name: default_cookie_name(),
            ttl_secs: default_ttl(),
            storage_dir: None,
            secure_cookie: false,
        }
    }
}

fn default_cookie_name() -> String {
    "survey_session".to_string()
}

fn default_ttl() -> u64 {
    86_400
}
