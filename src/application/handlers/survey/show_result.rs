//! ShowResultHandler - Scores a session and clears its answers.

use std::sync::Arc;

use crate::domain::foundation::SurveySessionId;
use crate::domain::survey::{ResultRecord, ScoringPolicy, SurveyError};
use crate::ports::SessionStore;

/// Query to score the current session.
#[derive(Debug, Clone)]
pub struct ShowResultQuery {
    pub session_id: SurveySessionId,
}

/// Handler for producing the survey result.
pub struct ShowResultHandler {
    store: Arc<dyn SessionStore>,
    policy: ScoringPolicy,
}

impl ShowResultHandler {
    pub fn new(store: Arc<dyn SessionStore>, policy: ScoringPolicy) -> Self {
        Self { store, policy }
    }

    /// Scores whatever the session holds, then deletes it so the next pass
    /// starts empty. A missing session scores as the empty accumulator.
    pub async fn handle(&self, query: ShowResultQuery) -> Result<ResultRecord, SurveyError> {
        let responses = self
            .store
            .load(&query.session_id)
            .await?
            .unwrap_or_default();

        let result = self.policy.score(&responses);

        self.store.delete(&query.session_id).await?;

        tracing::info!(
            session_id = %query.session_id,
            profile = ?result.profile,
            count_a = result.count_a,
            count_b = result.count_b,
            "Scored survey"
        );

        Ok(result)
    }
}
