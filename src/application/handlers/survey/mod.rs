//! Survey command and query handlers.
//!
//! Each handler loads the session's accumulator from the `SessionStore`,
//! hands it explicitly to the pure flow controller or scoring engine, and
//! writes back whatever changed.

mod show_question;
mod show_result;
mod submit_answer;

pub use show_question::{QuestionView, ShowQuestionHandler, ShowQuestionQuery};
pub use show_result::{ShowResultHandler, ShowResultQuery};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
