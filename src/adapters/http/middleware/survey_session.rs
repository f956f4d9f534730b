//! Survey session middleware and extractor for axum.
//!
//! This module provides:
//! - `survey_session_middleware` - Layer that resolves the session cookie and
//!   injects the session id into request extensions
//! - `CurrentSession` - Extractor that reads the injected id
//!
//! ```text
//! Request → survey_session_middleware → injects CurrentSession into extensions
//!                                               ↓
//!                                  Handler → CurrentSession extractor
//!                                               ↓
//! Response ← Set-Cookie appended when the id was freshly issued
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//! use std::sync::Arc;
//!
//! let cookie = Arc::new(SessionCookie::new("survey_session", 86_400, false));
//!
//! let app = Router::new()
//!     .route("/survey/result", get(show_result))
//!     .layer(middleware::from_fn_with_state(cookie, survey_session_middleware));
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::foundation::SurveySessionId;

/// Session cookie settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    max_age_secs: u64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age_secs: u64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_secs,
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds this cookie among the request's `Cookie` headers.
    ///
    /// Returns `None` when absent or when the value is not a valid id.
    pub fn read(&self, headers: &HeaderMap) -> Option<SurveySessionId> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .and_then(|(_, value)| value.trim().parse().ok())
    }

    /// `Set-Cookie` value issuing `id`.
    pub fn issue(&self, id: &SurveySessionId) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, id, self.max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Session id for the current request, as resolved by the middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession(pub SurveySessionId);

/// Resolves or issues the survey session cookie.
///
/// This middleware:
/// 1. Reads the session id from the `Cookie` header
/// 2. Generates a fresh id when the cookie is missing or malformed
/// 3. Injects `CurrentSession` into request extensions
/// 4. Appends `Set-Cookie` to the response for freshly generated ids
pub async fn survey_session_middleware(
    State(cookie): State<Arc<SessionCookie>>,
    mut request: Request,
    next: Next,
) -> Response {
    let (session_id, issued) = match cookie.read(request.headers()) {
        Some(id) => (id, false),
        None => (SurveySessionId::new(), true),
    };

    request.extensions_mut().insert(CurrentSession(session_id));
    let mut response = next.run(request).await;

    if issued {
        match HeaderValue::from_str(&cookie.issue(&session_id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
                tracing::debug!(session_id = %session_id, "Issued survey session cookie");
            }
            Err(e) => tracing::error!("Invalid session cookie header: {}", e),
        }
    }

    response
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .copied()
            .ok_or_else(|| {
                tracing::error!("CurrentSession extracted without survey_session_middleware");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Survey session unavailable",
                )
                    .into_response()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn cookie() -> SessionCookie {
        SessionCookie::new("survey_session", 600, false)
    }

    fn headers_with(cookie_header: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie_header).unwrap());
        headers
    }

    #[test]
    fn reads_named_cookie_among_others() {
        let id = SurveySessionId::new();
        let headers = headers_with(&format!("theme=dark; survey_session={}; lang=ko", id));
        assert_eq!(cookie().read(&headers), Some(id));
    }

    #[test]
    fn ignores_malformed_or_missing_cookie() {
        assert_eq!(cookie().read(&HeaderMap::new()), None);
        assert_eq!(cookie().read(&headers_with("survey_session=nope")), None);
        assert_eq!(
            cookie().read(&headers_with(&format!("other={}", SurveySessionId::new()))),
            None
        );
    }

    #[test]
    fn issue_formats_attributes() {
        let id = SurveySessionId::new();
        let value = cookie().issue(&id);
        assert_eq!(
            value,
            format!("survey_session={}; Path=/; HttpOnly; SameSite=Lax; Max-Age=600", id)
        );

        let secure = SessionCookie::new("s", 1, true).issue(&id);
        assert!(secure.ends_with("; Secure"));
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|CurrentSession(id): CurrentSession| async move { id.to_string() }),
            )
            .layer(middleware::from_fn_with_state(
                Arc::new(cookie()),
                survey_session_middleware,
            ))
    }

    #[tokio::test]
    async fn issues_cookie_for_new_visitors() {
        let response = app()
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("survey_session="));
    }

    #[tokio::test]
    async fn reuses_existing_cookie() {
        let id = SurveySessionId::new();
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .header(COOKIE, format!("survey_session={}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(SET_COOKIE).is_none());
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn extractor_without_middleware_is_server_error() {
        let app = Router::new().route(
            "/",
            get(|CurrentSession(id): CurrentSession| async move { id.to_string() }),
        );

        let response = app
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
