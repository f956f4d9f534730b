//! HTTP middleware and extractors.

mod survey_session;

pub use survey_session::{survey_session_middleware, CurrentSession, SessionCookie};
