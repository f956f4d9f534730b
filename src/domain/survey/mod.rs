//! Survey domain - question catalog, answer accumulator, flow and scoring.
//!
//! Everything here is pure: callers hand in the catalog and the session's
//! accumulator explicitly and persist any changes themselves.

mod catalog;
mod choice;
mod errors;
mod flow;
mod question;
mod responses;
mod scoring;

pub use catalog::{CatalogDocument, QuestionCatalog};
pub use choice::{Choice, UnknownChoice};
pub use errors::SurveyError;
pub use flow::{QuestionPage, SurveyFlow, Transition};
pub use question::{PageNumber, QuestionRecord};
pub use responses::Responses;
pub use scoring::{Profile, ResultRecord, ScoringPolicy, Tally, RESULT_HEADING};
