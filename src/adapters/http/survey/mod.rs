//! HTTP adapter for the survey pages.

mod dto;
mod handlers;
mod routes;
pub mod views;

pub use dto::ChoiceForm;
pub use handlers::{root_redirect, SurveyHandlers};
pub use routes::survey_routes;
