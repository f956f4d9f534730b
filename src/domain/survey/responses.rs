//! Per-session answer accumulator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::question::PageNumber;

/// Mapping from page number to the option chosen on that page.
///
/// Keys are unique; recording a page twice keeps only the latest choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    answers: BTreeMap<PageNumber, Choice>,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the answer for a page, returning the choice it replaced.
    pub fn record(&mut self, page: PageNumber, choice: Choice) -> Option<Choice> {
        self.answers.insert(page, choice)
    }

    pub fn get(&self, page: PageNumber) -> Option<Choice> {
        self.answers.get(&page).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of pages answered with `choice`.
    pub fn count(&self, choice: Choice) -> usize {
        self.answers.values().filter(|c| **c == choice).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageNumber, Choice)> + '_ {
        self.answers.iter().map(|(page, choice)| (*page, *choice))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl FromIterator<(PageNumber, Choice)> for Responses {
    fn from_iter<I: IntoIterator<Item = (PageNumber, Choice)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
