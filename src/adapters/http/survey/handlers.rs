//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::adapters::http::middleware::CurrentSession;
use crate::application::handlers::survey::{
    ShowQuestionHandler, ShowQuestionQuery, ShowResultHandler, ShowResultQuery,
    SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::SurveySessionId;
use crate::domain::survey::{QuestionCatalog, ScoringPolicy, SurveyError, Transition};
use crate::ports::SessionStore;

use super::dto::ChoiceForm;
use super::views;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    show_question: Arc<ShowQuestionHandler>,
    submit_answer: Arc<SubmitAnswerHandler>,
    show_result: Arc<ShowResultHandler>,
}

impl SurveyHandlers {
    pub fn new(
        show_question: Arc<ShowQuestionHandler>,
        submit_answer: Arc<SubmitAnswerHandler>,
        show_result: Arc<ShowResultHandler>,
    ) -> Self {
        Self {
            show_question,
            submit_answer,
            show_result,
        }
    }

    /// Builds every handler over one catalog and store.
    pub fn wire(
        catalog: Arc<QuestionCatalog>,
        store: Arc<dyn SessionStore>,
        policy: ScoringPolicy,
    ) -> Self {
        Self::new(
            Arc::new(ShowQuestionHandler::new(catalog.clone(), store.clone())),
            Arc::new(SubmitAnswerHandler::new(catalog, store.clone())),
            Arc::new(ShowResultHandler::new(store, policy)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Send visitors to the start page
pub async fn root_redirect() -> Redirect {
    Redirect::to("/survey")
}

/// GET /survey - Start page
pub async fn start_page() -> Html<String> {
    Html(views::start_page())
}

/// GET /survey/:page - Show one question
pub async fn show_question(
    State(handlers): State<SurveyHandlers>,
    CurrentSession(session_id): CurrentSession,
    Path(raw_page): Path<String>,
) -> Response {
    let Some(page) = parse_page(&raw_page) else {
        return page_not_found(&raw_page);
    };

    render_question(&handlers, session_id, page, None).await
}

/// POST /survey/:page - Record an answer and move on
pub async fn submit_answer(
    State(handlers): State<SurveyHandlers>,
    CurrentSession(session_id): CurrentSession,
    Path(raw_page): Path<String>,
    form: Option<Form<ChoiceForm>>,
) -> Response {
    let Some(page) = parse_page(&raw_page) else {
        return page_not_found(&raw_page);
    };

    let cmd = SubmitAnswerCommand {
        session_id,
        page,
        choice: form.and_then(|Form(form)| form.choice),
    };

    match handlers.submit_answer.handle(cmd).await {
        Ok(result) => match result.transition {
            Transition::Advance(next) => Redirect::to(&format!("/survey/{}", next)).into_response(),
            Transition::Complete => Redirect::to("/survey/result").into_response(),
        },
        Err(e) if e.is_recoverable() => {
            render_question(&handlers, session_id, page, Some(views::CHOICE_REQUIRED_NOTICE))
                .await
        }
        Err(e) => handle_survey_error(e),
    }
}

/// GET /survey/result - Score and clear the session
pub async fn show_result(
    State(handlers): State<SurveyHandlers>,
    CurrentSession(session_id): CurrentSession,
) -> Response {
    match handlers
        .show_result
        .handle(ShowResultQuery { session_id })
        .await
    {
        Ok(result) => Html(views::result_page(&result)).into_response(),
        Err(e) => handle_survey_error(e),
    }
}

async fn render_question(
    handlers: &SurveyHandlers,
    session_id: SurveySessionId,
    page: u32,
    notice: Option<&str>,
) -> Response {
    match handlers
        .show_question
        .handle(ShowQuestionQuery { session_id, page })
        .await
    {
        Ok(view) => Html(views::question_page(&view, notice)).into_response(),
        Err(e) => handle_survey_error(e),
    }
}

/// Page numbers are plain decimal digits; anything else cannot name a page.
fn parse_page(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn page_not_found(raw_page: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found_page(&format!(
            "There is no survey page \"{}\".",
            raw_page
        ))),
    )
        .into_response()
}

fn handle_survey_error(error: SurveyError) -> Response {
    let code = error.code();
    match error {
        SurveyError::QuestionNotFound(page) => {
            tracing::debug!(code = %code, page, "Survey page not found");
            page_not_found(&page.to_string())
        }
        // `submit_answer` re-renders before reaching this arm.
        SurveyError::InvalidChoice { page, .. } => {
            tracing::warn!(code = %code, page, "Unhandled invalid survey answer");
            (
                StatusCode::BAD_REQUEST,
                Html(views::bad_request_page(&format!(
                    "The answer for page {} was not understood.",
                    page
                ))),
            )
                .into_response()
        }
        SurveyError::Infrastructure(msg) => {
            tracing::error!(code = %code, "Survey session storage failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::error_page()),
            )
                .into_response()
        }
    }
}
