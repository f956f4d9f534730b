//! Flow controller: linear page-to-page navigation.
//!
//! The survey is a straight line of states `1..=N` followed by a terminal
//! scored state. A valid submission on page `k` moves to `k + 1`, or to the
//! terminal state when `k` is the last page. An invalid submission leaves the
//! respondent on `k`. Backward moves only happen through direct navigation,
//! which re-renders a page without touching other answers.
//!
//! The controller never reaches into session storage: the caller passes the
//! accumulator in and persists it afterwards.

use super::catalog::QuestionCatalog;
use super::choice::Choice;
use super::errors::SurveyError;
use super::question::{PageNumber, QuestionRecord};
use super::responses::Responses;

/// What the respondent sees for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub question: QuestionRecord,
    pub current_page: u32,
    pub total_pages: usize,
}

/// Where to go after an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Show the given page next.
    Advance(PageNumber),
    /// Every page has been answered; score the accumulator.
    Complete,
}

/// Drives a respondent through the catalog in ascending page order.
#[derive(Debug, Clone, Copy)]
pub struct SurveyFlow<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> SurveyFlow<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Looks up the question for `page`.
    ///
    /// # Errors
    ///
    /// `QuestionNotFound` for page 0 or any page beyond the catalog.
    pub fn enter(&self, page: u32) -> Result<QuestionPage, SurveyError> {
        let question = self.lookup(page)?;
        Ok(QuestionPage {
            question: question.clone(),
            current_page: page,
            total_pages: self.catalog.len(),
        })
    }

    /// Records an answer for `page` and decides the next step.
    ///
    /// `raw_choice` is the unvalidated client value. On any error the
    /// accumulator is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if `page` has no question
    /// - `InvalidChoice` if `raw_choice` is missing or not exactly "A"/"B"
    pub fn submit(
        &self,
        page: u32,
        raw_choice: Option<&str>,
        responses: &mut Responses,
    ) -> Result<Transition, SurveyError> {
        let question = self.lookup(page)?;
        let choice: Choice = raw_choice
            .ok_or_else(|| SurveyError::invalid_choice(page, None))?
            .parse()
            .map_err(|_| SurveyError::invalid_choice(page, raw_choice))?;

        let current = question.page_number;
        responses.record(current, choice);

        let next = current.next();
        if self.catalog.contains(next) {
            Ok(Transition::Advance(next))
        } else {
            Ok(Transition::Complete)
        }
    }

    fn lookup(&self, page: u32) -> Result<&'a QuestionRecord, SurveyError> {
        PageNumber::new(page)
            .ok()
            .and_then(|p| self.catalog.get(p))
            .ok_or_else(|| SurveyError::not_found(page))
    }
}
