//! HTTP DTOs for survey endpoints.

use serde::Deserialize;

/// Urlencoded body posted from a question page.
///
/// The value is kept raw; validation belongs to the flow controller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceForm {
    #[serde(default)]
    pub choice: Option<String>,
}
