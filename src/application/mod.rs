//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change session state; query handlers only read it.

pub mod handlers;

pub use handlers::survey::{
    QuestionView, ShowQuestionHandler, ShowQuestionQuery, ShowResultHandler, ShowResultQuery,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
