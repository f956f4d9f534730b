//! Scoring engine: tallies answers and picks one of three fixed narratives.

use serde::Serialize;

use super::choice::Choice;
use super::responses::Responses;
use crate::domain::foundation::ValidationError;

/// Heading shown above every result.
pub const RESULT_HEADING: &str = "Pilyeon's analysis of your ideal type";

/// Option counts for one accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub count_a: usize,
    pub count_b: usize,
}

impl Tally {
    pub fn from_responses(responses: &Responses) -> Self {
        Self {
            count_a: responses.count(Choice::A),
            count_b: responses.count(Choice::B),
        }
    }
}

/// The three result narratives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Mostly A: gentle and emotionally attuned.
    Warm,
    /// Mostly B: proactive and takes the lead.
    Assertive,
    /// Everything else, including ties and short answer sets.
    Balanced,
}

impl Profile {
    pub fn title(&self) -> &'static str {
        match self {
            Profile::Warm => "The warm and caring 'pure-hearted lover' type",
            Profile::Assertive => "The spirited 'active leader' type",
            Profile::Balanced => "The well-balanced 'realistic romantic' type",
        }
    }

    pub fn matched_profile(&self) -> &'static str {
        match self {
            Profile::Warm => "IU",
            Profile::Assertive => "Jungkook (BTS)",
            Profile::Balanced => "Suzy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::Warm => {
                "Embraces a partner warmly with delicate sensitivity and generosity. \
                 Prefers cosy dates at home."
            }
            Profile::Assertive => {
                "Proactive in everything and enjoys taking the lead in a relationship. \
                 Prefers new experiences and active dates."
            }
            Profile::Balanced => {
                "An all-rounder who keeps emotion and reason in balance. Flexible enough \
                 to lead at times and to follow at others."
            }
        }
    }
}

/// Threshold rule mapping a tally to a profile.
///
/// The first matching rule wins: `count_a >= threshold` gives `Warm`, then
/// `count_b >= threshold` gives `Assertive`, otherwise `Balanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    threshold: usize,
}

impl ScoringPolicy {
    /// Strict-majority threshold for a survey of `question_count` pages,
    /// `ceil((N + 1) / 2)`. Eight questions give a threshold of five.
    pub fn for_question_count(question_count: usize) -> Self {
        Self {
            threshold: question_count / 2 + 1,
        }
    }

    /// Explicit threshold, which must lie in `1..=question_count`.
    pub fn with_threshold(
        threshold: usize,
        question_count: usize,
    ) -> Result<Self, ValidationError> {
        if threshold == 0 || threshold > question_count {
            return Err(ValidationError::out_of_range(
                "threshold",
                1,
                question_count as i64,
                threshold as i64,
            ));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn classify(&self, tally: Tally) -> Profile {
        match tally {
            Tally { count_a, .. } if count_a >= self.threshold => Profile::Warm,
            Tally { count_b, .. } if count_b >= self.threshold => Profile::Assertive,
            _ => Profile::Balanced,
        }
    }

    /// Scores an accumulator. Total over every input, including the empty one.
    pub fn score(&self, responses: &Responses) -> ResultRecord {
        let tally = Tally::from_responses(responses);
        ResultRecord::new(self.classify(tally), tally)
    }
}

/// A derived result; recomputed each time and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub profile: Profile,
    pub title: &'static str,
    pub matched_profile: &'static str,
    pub description: &'static str,
    pub count_a: usize,
    pub count_b: usize,
}

impl ResultRecord {
    pub fn new(profile: Profile, tally: Tally) -> Self {
        Self {
            profile,
            title: profile.title(),
            matched_profile: profile.matched_profile(),
            description: profile.description(),
            count_a: tally.count_a,
            count_b: tally.count_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::question::PageNumber;
    use proptest::prelude::*;

    fn responses_from(letters: &[&str]) -> Responses {
        letters
            .iter()
            .enumerate()
            .map(|(i, l)| {
                (
                    PageNumber::new(i as u32 + 1).unwrap(),
                    l.parse::<Choice>().unwrap(),
                )
            })
            .collect()
    }

    fn eight() -> ScoringPolicy {
        ScoringPolicy::for_question_count(8)
    }

    #[test]
    fn eight_questions_derive_threshold_five() {
        assert_eq!(eight().threshold(), 5);
    }

    #[test]
    fn derived_threshold_is_strict_majority() {
        assert_eq!(ScoringPolicy::for_question_count(1).threshold(), 1);
        assert_eq!(ScoringPolicy::for_question_count(7).threshold(), 4);
        assert_eq!(ScoringPolicy::for_question_count(10).threshold(), 6);
    }

    #[test]
    fn explicit_threshold_must_fit_question_count() {
        assert!(ScoringPolicy::with_threshold(0, 8).is_err());
        assert!(ScoringPolicy::with_threshold(9, 8).is_err());
        assert_eq!(ScoringPolicy::with_threshold(5, 8).unwrap().threshold(), 5);
    }

    #[test]
    fn mostly_a_is_warm() {
        let result = eight().score(&responses_from(&["A", "A", "A", "A", "A", "B", "B", "B"]));
        assert_eq!(result.profile, Profile::Warm);
        assert_eq!((result.count_a, result.count_b), (5, 3));
        assert_eq!(result.matched_profile, "IU");
    }

    #[test]
    fn mostly_b_is_assertive() {
        let result = eight().score(&responses_from(&["B", "B", "B", "B", "B", "A", "A", "A"]));
        assert_eq!(result.profile, Profile::Assertive);
        assert_eq!((result.count_a, result.count_b), (3, 5));
    }

    #[test]
    fn tie_is_balanced() {
        let result = eight().score(&responses_from(&["A", "B", "A", "B", "A", "B", "A", "B"]));
        assert_eq!(result.profile, Profile::Balanced);
        assert_eq!((result.count_a, result.count_b), (4, 4));
    }

    #[test]
    fn empty_accumulator_is_balanced() {
        let result = eight().score(&Responses::new());
        assert_eq!(result.profile, Profile::Balanced);
        assert_eq!((result.count_a, result.count_b), (0, 0));
    }

    #[test]
    fn warm_wins_when_both_reach_threshold() {
        let low = ScoringPolicy::with_threshold(2, 8).unwrap();
        let tally = Tally {
            count_a: 3,
            count_b: 5,
        };
        assert_eq!(low.classify(tally), Profile::Warm);
    }

    #[test]
    fn result_record_copies_profile_text() {
        let record = ResultRecord::new(Profile::Assertive, Tally::default());
        assert_eq!(record.title, Profile::Assertive.title());
        assert_eq!(record.description, Profile::Assertive.description());
    }

    proptest! {
        #[test]
        fn count_a_at_threshold_is_always_warm(count_a in 5usize..20, count_b in 0usize..20) {
            prop_assert_eq!(eight().classify(Tally { count_a, count_b }), Profile::Warm);
        }

        #[test]
        fn count_b_at_threshold_without_a_is_assertive(count_a in 0usize..5, count_b in 5usize..20) {
            prop_assert_eq!(eight().classify(Tally { count_a, count_b }), Profile::Assertive);
        }

        #[test]
        fn both_below_threshold_is_balanced(count_a in 0usize..5, count_b in 0usize..5) {
            prop_assert_eq!(eight().classify(Tally { count_a, count_b }), Profile::Balanced);
        }

        #[test]
        fn score_counts_match_accumulator(letters in proptest::collection::vec(prop_oneof![Just("A"), Just("B")], 0..8)) {
            let responses = responses_from(&letters);
            let result = eight().score(&responses);
            let a = letters.iter().filter(|&&l| l == "A").count();
            prop_assert_eq!(result.count_a, a);
            prop_assert_eq!(result.count_b, letters.len() - a);
        }
    }
}
