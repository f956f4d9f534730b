//! Question records and page numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One-based position of a question in the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page of every survey.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number, rejecting zero.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                "page_number",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The page that follows this one.
    pub fn next(&self) -> PageNumber {
        PageNumber(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageNumber::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single binary-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub page_number: PageNumber,
    pub prompt: String,
    pub description: String,
    pub option_a_label: String,
    pub option_b_label: String,
}

impl QuestionRecord {
    pub fn new(
        page_number: PageNumber,
        prompt: impl Into<String>,
        description: impl Into<String>,
        option_a_label: impl Into<String>,
        option_b_label: impl Into<String>,
    ) -> Self {
        Self {
            page_number,
            prompt: prompt.into(),
            description: description.into(),
            option_a_label: option_a_label.into(),
            option_b_label: option_b_label.into(),
        }
    }

    /// Checks that the short labels are present. The description may be empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if self.option_a_label.trim().is_empty() {
            return Err(ValidationError::empty_field("option_a_label"));
        }
        if self.option_b_label.trim().is_empty() {
            return Err(ValidationError::empty_field("option_b_label"));
        }
        Ok(())
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.page_number, self.prompt)
    }
}
