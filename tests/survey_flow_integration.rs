//! End-to-end tests for the survey HTTP surface.
//!
//! These tests drive the full router the way a browser would:
//! 1. The first response issues a session cookie
//! 2. Every later request sends it back
//! 3. Answers are posted page by page until the result page is reached

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use pilyeon::adapters::http::{app_router, SessionCookie, SurveyHandlers};
use pilyeon::adapters::{BuiltinCatalogSource, FileSessionStore, InMemorySessionStore};
use pilyeon::domain::foundation::SurveySessionId;
use pilyeon::domain::survey::{Choice, PageNumber, Profile, ScoringPolicy};
use pilyeon::ports::{CatalogSource, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

const COOKIE_NAME: &str = "survey_session";

struct TestApp {
    router: Router,
    store: Arc<dyn SessionStore>,
    cookie: Option<String>,
}

impl TestApp {
    async fn new(store: Arc<dyn SessionStore>) -> Self {
        let catalog = Arc::new(BuiltinCatalogSource::new().load().await.unwrap());
        let policy = ScoringPolicy::for_question_count(catalog.len());
        let handlers = SurveyHandlers::wire(catalog, store.clone(), policy);
        let router = app_router(
            handlers,
            SessionCookie::new(COOKIE_NAME, 3600, false),
            Duration::from_secs(5),
        );
        Self {
            router,
            store,
            cookie: None,
        }
    }

    async fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySessionStore::new(Duration::from_secs(3600)))).await
    }

    async fn send(&mut self, request: axum::http::request::Builder, body: Body) -> Response {
        let request = match &self.cookie {
            Some(cookie) => request.header(header::COOKIE, cookie.clone()),
            None => request,
        };
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        response
    }

    async fn get(&mut self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri), Body::empty()).await
    }

    async fn post_choice(&mut self, page: u32, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(format!("/survey/{}", page))
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
            Body::from(body.to_string()),
        )
        .await
    }

    fn session_id(&self) -> SurveySessionId {
        let cookie = self.cookie.as_ref().expect("no session cookie issued");
        let value = cookie
            .strip_prefix(&format!("{}=", COOKIE_NAME))
            .expect("unexpected cookie name");
        value.parse().unwrap()
    }

    /// Answers every page and returns the body of the result page.
    async fn complete(&mut self, answers: &[&str]) -> String {
        self.get("/survey").await;
        for (i, answer) in answers.iter().enumerate() {
            let page = i as u32 + 1;
            let response = self.post_choice(page, &format!("choice={}", answer)).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            let expected = if page as usize == answers.len() {
                "/survey/result".to_string()
            } else {
                format!("/survey/{}", page + 1)
            };
            assert_eq!(location(&response), expected);
        }

        let response = self.get("/survey/result").await;
        assert_eq!(response.status(), StatusCode::OK);
        body_text(response).await
    }
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn escaped(text: &str) -> String {
    pilyeon::adapters::http::survey::views::escape(text)
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn scenario_a_mostly_a_yields_warm_profile_and_clears_session() {
    let mut app = TestApp::in_memory().await;

    let html = app
        .complete(&["A", "A", "A", "A", "A", "B", "B", "B"])
        .await;

    assert!(html.contains(&escaped(Profile::Warm.title())));
    assert!(html.contains("A: 5 &middot; B: 3"));
    assert_eq!(app.store.load(&app.session_id()).await.unwrap(), None);
}

#[tokio::test]
async fn scenario_b_mostly_b_yields_assertive_profile() {
    let mut app = TestApp::in_memory().await;

    let html = app
        .complete(&["B", "B", "B", "B", "B", "A", "A", "A"])
        .await;

    assert!(html.contains(&escaped(Profile::Assertive.title())));
    assert!(html.contains("A: 3 &middot; B: 5"));
}

#[tokio::test]
async fn scenario_c_alternating_yields_balanced_profile() {
    let mut app = TestApp::in_memory().await;

    let html = app
        .complete(&["A", "B", "A", "B", "A", "B", "A", "B"])
        .await;

    assert!(html.contains(&escaped(Profile::Balanced.title())));
    assert!(html.contains("A: 4 &middot; B: 4"));
}

#[tokio::test]
async fn file_backed_sessions_complete_the_same_way() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(FileSessionStore::new(
        temp_dir.path(),
        Duration::from_secs(3600),
    ));
    let mut app = TestApp::new(store).await;

    let html = app
        .complete(&["A", "A", "A", "A", "A", "A", "B", "B"])
        .await;

    assert!(html.contains(&escaped(Profile::Warm.title())));
    assert_eq!(app.store.load(&app.session_id()).await.unwrap(), None);
}

// =============================================================================
// Navigation and validation
// =============================================================================

#[tokio::test]
async fn out_of_range_pages_are_not_found() {
    let mut app = TestApp::in_memory().await;

    assert_eq!(app.get("/survey/0").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/survey/9").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.post_choice(9, "choice=A").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn question_page_shows_progress() {
    let mut app = TestApp::in_memory().await;

    let response = app.get("/survey/3").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("3 / 8"));
    assert!(html.contains("action=\"/survey/3\""));
}

#[tokio::test]
async fn invalid_choice_rerenders_same_page_without_recording() {
    let mut app = TestApp::in_memory().await;
    app.get("/survey").await;
    app.post_choice(1, "choice=B").await;

    for body in ["", "choice=", "choice=C", "choice=a"] {
        let response = app.post_choice(2, body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("action=\"/survey/2\""));
        assert!(html.contains("role=\"alert\""));
    }

    let saved = app.store.load(&app.session_id()).await.unwrap().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.get(PageNumber::new(2).unwrap()), None);
}

#[tokio::test]
async fn revisiting_a_page_keeps_other_answers_and_last_write_wins() {
    let mut app = TestApp::in_memory().await;
    app.get("/survey").await;
    app.post_choice(1, "choice=A").await;
    app.post_choice(2, "choice=A").await;

    let response = app.get("/survey/1").await;
    let html = body_text(response).await;
    assert!(html.contains("value=\"A\" required checked"));

    let response = app.post_choice(1, "choice=B").await;
    assert_eq!(location(&response), "/survey/2");

    let saved = app.store.load(&app.session_id()).await.unwrap().unwrap();
    assert_eq!(saved.get(PageNumber::FIRST), Some(Choice::B));
    assert_eq!(saved.get(PageNumber::new(2).unwrap()), Some(Choice::A));
}

#[tokio::test]
async fn result_without_answers_is_balanced() {
    let mut app = TestApp::in_memory().await;

    let response = app.get("/survey/result").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&escaped(Profile::Balanced.title())));
    assert!(html.contains("A: 0 &middot; B: 0"));
}

#[tokio::test]
async fn second_pass_starts_from_empty_accumulator() {
    let mut app = TestApp::in_memory().await;
    app.complete(&["B", "B", "B", "B", "B", "B", "B", "B"]).await;

    app.post_choice(1, "choice=A").await;

    let saved = app.store.load(&app.session_id()).await.unwrap().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.get(PageNumber::FIRST), Some(Choice::A));
}
