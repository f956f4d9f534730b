//! Top-level application router.
//!
//! Mounts the survey pages under `/survey`, the root redirect and a health
//! probe, and wraps everything in the shared tower layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::middleware::{survey_session_middleware, SessionCookie};
use super::survey::{root_redirect, survey_routes, SurveyHandlers};

/// GET /health - Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the full application router.
///
/// Only the survey routes carry the session cookie middleware.
pub fn app_router(
    handlers: SurveyHandlers,
    cookie: SessionCookie,
    request_timeout: Duration,
) -> Router {
    let survey = survey_routes(handlers).layer(middleware::from_fn_with_state(
        Arc::new(cookie),
        survey_session_middleware,
    ));

    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .nest("/survey", survey)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
