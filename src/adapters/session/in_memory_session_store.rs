//! In-Memory Session Store Adapter
//!
//! Keeps answer accumulators in memory. Suitable for a single instance and
//! for tests; everything is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::StoredSession;
use crate::domain::foundation::{DomainError, SurveySessionId, Timestamp};
use crate::domain::survey::Responses;
use crate::ports::SessionStore;

/// In-memory storage for survey sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SurveySessionId, StoredSession>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Create a new in-memory store whose entries live `ttl` past their last write
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| stored.is_live(&now));
        before - sessions.len()
    }

    /// Get the number of stored sessions, expired or not
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &SurveySessionId) -> Result<Option<Responses>, DomainError> {
        let now = Timestamp::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                Some(stored) if stored.is_live(&now) => {
                    return Ok(Some(stored.responses.clone()))
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        tracing::debug!(session_id = %id, "Discarding expired survey session");
        self.sessions.write().await.remove(id);
        Ok(None)
    }

    async fn save(&self, id: &SurveySessionId, responses: &Responses) -> Result<(), DomainError> {
        let purged = self.purge_expired().await;
        if purged > 0 {
            tracing::debug!(purged, "Purged expired survey sessions");
        }

        let mut sessions = self.sessions.write().await;
        sessions.insert(*id, StoredSession::new(responses.clone(), self.ttl));
        Ok(())
    }

    async fn delete(&self, id: &SurveySessionId) -> Result<(), DomainError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}
