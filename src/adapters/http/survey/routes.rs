//! HTTP routes for survey endpoints.

use axum::{routing::get, Router};

use super::handlers::{show_question, show_result, start_page, submit_answer, SurveyHandlers};

/// Creates the survey router, to be nested under `/survey`.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/", get(start_page))
        .route("/result", get(show_result))
        .route("/:page", get(show_question).post(submit_answer))
        .with_state(handlers)
}
