//! ShowQuestionHandler - Query handler for rendering one survey page.

use std::sync::Arc;

use crate::domain::foundation::SurveySessionId;
use crate::domain::survey::{Choice, QuestionCatalog, QuestionPage, SurveyError, SurveyFlow};
use crate::ports::SessionStore;

/// Query to show the question for a page.
#[derive(Debug, Clone)]
pub struct ShowQuestionQuery {
    pub session_id: SurveySessionId,
    pub page: u32,
}

/// Question page plus the respondent's earlier answer for it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub page: QuestionPage,
    pub selected: Option<Choice>,
}

/// Handler for showing a survey page.
pub struct ShowQuestionHandler {
    catalog: Arc<QuestionCatalog>,
    store: Arc<dyn SessionStore>,
}

impl ShowQuestionHandler {
    pub fn new(catalog: Arc<QuestionCatalog>, store: Arc<dyn SessionStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, query: ShowQuestionQuery) -> Result<QuestionView, SurveyError> {
        let page = SurveyFlow::new(&self.catalog).enter(query.page)?;

        let selected = self
            .store
            .load(&query.session_id)
            .await?
            .and_then(|responses| responses.get(page.question.page_number));

        Ok(QuestionView { page, selected })
    }
}
