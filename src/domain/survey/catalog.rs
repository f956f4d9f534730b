//! The ordered, read-only question bank.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::question::{PageNumber, QuestionRecord};
use crate::domain::foundation::ValidationError;

/// Fixed, ordered collection of questions for pages `1..=N`.
///
/// Construction enforces that pages are unique and dense, so any page in
/// `1..=len()` is guaranteed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: BTreeMap<PageNumber, QuestionRecord>,
}

/// On-disk shape of a catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub questions: Vec<QuestionRecord>,
}

impl QuestionCatalog {
    /// Builds a catalog, validating every record and the page sequence.
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, ValidationError> {
        if records.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut questions = BTreeMap::new();
        for record in records {
            record.validate()?;
            let page = record.page_number;
            if questions.insert(page, record).is_some() {
                return Err(ValidationError::invalid_format(
                    "page_number",
                    format!("page {} appears more than once", page),
                ));
            }
        }

        for (expected, page) in (1u32..).zip(questions.keys()) {
            if page.value() != expected {
                return Err(ValidationError::invalid_format(
                    "page_number",
                    format!("expected page {} but found page {}", expected, page),
                ));
            }
        }

        Ok(Self { questions })
    }

    /// Parses a YAML catalog document.
    pub fn from_yaml(source: &str) -> Result<Self, ValidationError> {
        let document: CatalogDocument = serde_yaml::from_str(source)
            .map_err(|e| ValidationError::invalid_format("questions", e.to_string()))?;
        Self::from_records(document.questions)
    }

    pub fn get(&self, page: PageNumber) -> Option<&QuestionRecord> {
        self.questions.get(&page)
    }

    pub fn contains(&self, page: PageNumber) -> bool {
        self.questions.contains_key(&page)
    }

    /// Number of questions (N).
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_page(&self) -> Option<PageNumber> {
        self.questions.keys().next_back().copied()
    }

    /// Questions in page order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(page: u32) -> QuestionRecord {
        QuestionRecord::new(
            PageNumber::new(page).unwrap(),
            format!("Question {}", page),
            "",
            "First",
            "Second",
        )
    }

    #[test]
    fn builds_from_dense_records_in_any_order() {
        let catalog =
            QuestionCatalog::from_records(vec![record(3), record(1), record(2)]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.last_page().unwrap().value(), 3);
        let pages: Vec<u32> = catalog.iter().map(|q| q.page_number.value()).collect();
        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(
            QuestionCatalog::from_records(vec![]),
            Err(ValidationError::empty_field("questions"))
        );
    }

    #[test]
    fn rejects_duplicate_pages() {
        let result = QuestionCatalog::from_records(vec![record(1), record(1)]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_gaps() {
        let result = QuestionCatalog::from_records(vec![record(1), record(3)]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_sequence_not_starting_at_one() {
        let result = QuestionCatalog::from_records(vec![record(2), record(3)]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_invalid_record() {
        let mut bad = record(1);
        bad.option_a_label = String::new();
        assert_eq!(
            QuestionCatalog::from_records(vec![bad]),
            Err(ValidationError::empty_field("option_a_label"))
        );
    }

    #[test]
    fn lookup_by_page() {
        let catalog = QuestionCatalog::from_records(vec![record(1), record(2)]).unwrap();
        let page = PageNumber::new(2).unwrap();
        assert!(catalog.contains(page));
        assert_eq!(catalog.get(page).unwrap().prompt, "Question 2");
        assert!(catalog.get(PageNumber::new(3).unwrap()).is_none());
    }

    #[test]
    fn parses_yaml_document() {
        let yaml = r#"
questions:
  - page_number: 1
    prompt: Date style
    description: Where would you rather be?
    option_a_label: At home
    option_b_label: Outdoors
  - page_number: 2
    prompt: Messaging
    description: ""
    option_a_label: Long letters
    option_b_label: Quick texts
"#;
        let catalog = QuestionCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(PageNumber::FIRST).unwrap().option_b_label,
            "Outdoors"
        );
    }

    #[test]
    fn malformed_yaml_is_a_format_error() {
        let result = QuestionCatalog::from_yaml("questions: [page_number: zero]");
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }
}
