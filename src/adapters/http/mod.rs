//! HTTP adapters - server-rendered survey pages over axum.

pub mod middleware;
pub mod survey;

mod router;

pub use middleware::{CurrentSession, SessionCookie};
pub use router::app_router;
pub use survey::SurveyHandlers;
