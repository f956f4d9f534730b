//! SubmitAnswerHandler - Command handler for recording one answer.

use std::sync::Arc;

use crate::domain::foundation::SurveySessionId;
use crate::domain::survey::{QuestionCatalog, SurveyError, SurveyFlow, Transition};
use crate::ports::SessionStore;

/// Command to answer the question on a page.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SurveySessionId,
    pub page: u32,
    /// Raw form value, unvalidated.
    pub choice: Option<String>,
}

/// Result of an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAnswerResult {
    pub transition: Transition,
    pub answered: usize,
}

/// Handler for recording answers.
pub struct SubmitAnswerHandler {
    catalog: Arc<QuestionCatalog>,
    store: Arc<dyn SessionStore>,
}

impl SubmitAnswerHandler {
    pub fn new(catalog: Arc<QuestionCatalog>, store: Arc<dyn SessionStore>) -> Self {
        Self { catalog, store }
    }

    /// Records the answer and reports where to go next.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` for a page outside the catalog
    /// - `InvalidChoice` for anything but "A"/"B"; nothing is written
    /// - `Infrastructure` if the session store fails
    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, SurveyError> {
        let flow = SurveyFlow::new(&self.catalog);
        let mut responses = self
            .store
            .load(&cmd.session_id)
            .await?
            .unwrap_or_default();

        let transition = match flow.submit(cmd.page, cmd.choice.as_deref(), &mut responses) {
            Ok(transition) => transition,
            Err(e @ SurveyError::InvalidChoice { .. }) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    page = cmd.page,
                    choice = ?cmd.choice,
                    "Rejected survey answer"
                );
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        self.store.save(&cmd.session_id, &responses).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            page = cmd.page,
            answered = responses.len(),
            next = ?transition,
            "Recorded survey answer"
        );

        Ok(SubmitAnswerResult {
            transition,
            answered: responses.len(),
        })
    }
}
