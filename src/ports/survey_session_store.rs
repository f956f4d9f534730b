//! Survey session store port.
//!
//! Holds one answer accumulator per survey session. The flow only needs
//! read, upsert and delete-by-key, so that is all the contract offers.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SurveySessionId};
use crate::domain::survey::Responses;

/// Port for per-session answer storage.
///
/// Implementations must treat an expired or unknown session exactly like an
/// absent one.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the accumulator for a session.
    ///
    /// Returns `None` if nothing has been saved yet or the entry expired.
    async fn load(&self, id: &SurveySessionId) -> Result<Option<Responses>, DomainError>;

    /// Insert or replace the accumulator for a session.
    ///
    /// # Errors
    ///
    /// - `SessionStoreError` on persistence failure
    async fn save(&self, id: &SurveySessionId, responses: &Responses) -> Result<(), DomainError>;

    /// Remove the accumulator for a session. Removing a missing entry succeeds.
    async fn delete(&self, id: &SurveySessionId) -> Result<(), DomainError>;
}
