//! Survey-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while walking a respondent through the survey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// No question exists for the requested page.
    #[error("No question for page {0}")]
    QuestionNotFound(u32),

    /// The submitted value was not exactly "A" or "B".
    #[error("Invalid choice for page {page}: {raw:?}")]
    InvalidChoice { page: u32, raw: Option<String> },

    /// Session storage failed underneath the flow.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl SurveyError {
    pub fn not_found(page: u32) -> Self {
        SurveyError::QuestionNotFound(page)
    }

    pub fn invalid_choice(page: u32, raw: Option<&str>) -> Self {
        SurveyError::InvalidChoice {
            page,
            raw: raw.map(str::to_string),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SurveyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            SurveyError::InvalidChoice { .. } => ErrorCode::InvalidChoice,
            SurveyError::Infrastructure(_) => ErrorCode::SessionStoreError,
        }
    }

    /// True when the caller should re-display the current page rather than
    /// fail the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SurveyError::InvalidChoice { .. })
    }
}

impl From<DomainError> for SurveyError {
    fn from(err: DomainError) -> Self {
        SurveyError::Infrastructure(err.to_string())
    }
}
