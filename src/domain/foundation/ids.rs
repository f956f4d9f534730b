//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for one browser's survey session.
///
/// Carried in the session cookie and used as the key for the answer
/// accumulator in a `SessionStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveySessionId(Uuid);

impl SurveySessionId {
    /// Creates a new random SurveySessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SurveySessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SurveySessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurveySessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SurveySessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
