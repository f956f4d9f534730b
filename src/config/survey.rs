//! Survey configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::survey::ScoringPolicy;

/// Question catalog and scoring settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyConfig {
    /// YAML catalog file; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Fixed scoring threshold; derived from the question count when unset
    pub threshold: Option<usize>,
}

impl SurveyConfig {
    /// Scoring policy for a catalog of `question_count` questions.
    pub fn scoring_policy(&self, question_count: usize) -> Result<ScoringPolicy, ValidationError> {
        match self.threshold {
            None => Ok(ScoringPolicy::for_question_count(question_count)),
            Some(threshold) => ScoringPolicy::with_threshold(threshold, question_count).map_err(
                |_| ValidationError::InvalidThreshold {
                    threshold,
                    question_count,
                },
            ),
        }
    }

    /// Validate what can be checked before the catalog is loaded
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.threshold == Some(0) {
            return Err(ValidationError::InvalidThreshold {
                threshold: 0,
                question_count: 0,
            });
        }
        Ok(())
    }
}
