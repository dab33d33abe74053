//! Point values and result summaries.
//!
//! Points come from the position of the chosen option, not from whether it
//! matches the canonical answer. The total is bucketed into three effort
//! levels with fixed thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Question;

/// Points for picking the first option.
pub const MAX_POINTS_PER_QUESTION: u32 = 3;

/// Highest score still summarized as [`EffortLevel::Low`].
pub const LOW_EFFORT_MAX: u32 = 17;

/// Highest score still summarized as [`EffortLevel::Moderate`].
pub const MODERATE_EFFORT_MAX: u32 = 24;

/// Points for choosing `selected` among `options`.
///
/// First option → 3, second → 2, anything else (including a value that is
/// not one of the options) → 1.
pub fn answer_points(options: &[String], selected: &str) -> u32 {
    match options.iter().position(|o| o == selected) {
        Some(0) => 3,
        Some(1) => 2,
        _ => 1,
    }
}

/// Sum of all point values; unanswered questions count as 0.
///
/// Saturates at `u32::MAX` instead of overflowing.
pub fn total_score(questions: &[Question]) -> u32 {
    questions
        .iter()
        .map(|q| q.point.unwrap_or(0))
        .fold(0, u32::saturating_add)
}

/// Result category for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Low,
    Moderate,
    High,
}

impl EffortLevel {
    pub fn from_score(score: u32) -> Self {
        if score <= LOW_EFFORT_MAX {
            EffortLevel::Low
        } else if score <= MODERATE_EFFORT_MAX {
            EffortLevel::Moderate
        } else {
            EffortLevel::High
        }
    }

    /// The summary text shown to the user for this level.
    pub fn summary(self) -> &'static str {
        match self {
            EffortLevel::Low => LOW_EFFORT_SUMMARY,
            EffortLevel::Moderate => MODERATE_EFFORT_SUMMARY,
            EffortLevel::High => HIGH_EFFORT_SUMMARY,
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffortLevel::Low => write!(f, "low"),
            EffortLevel::Moderate => write!(f, "moderate"),
            EffortLevel::High => write!(f, "high"),
        }
    }
}

const LOW_EFFORT_SUMMARY: &str = "You tend to put in little effort and rely more on circumstances. \
Build up the drive to work harder instead of hoping without taking action.";

const MODERATE_EFFORT_SUMMARY: &str = "You put in a fair amount of effort, but sometimes still hesitate \
or give up too easily. Work on your persistence and self-confidence.";

const HIGH_EFFORT_SUMMARY: &str = "You have an outstanding drive to strive. You believe that maximum \
effort and prayer are the keys to success.";

/// Final score with its category and summary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub level: EffortLevel,
    pub summary: String,
}

/// Score a list of questions.
pub fn score_questions(questions: &[Question]) -> ScoreSummary {
    let score = total_score(questions);
    let level = EffortLevel::from_score(score);
    ScoreSummary {
        score,
        level,
        summary: level.summary().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["A".into(), "B".into(), "C".into()]
    }

    fn answered(point: Option<u32>) -> Question {
        let mut q = Question::new(1, "q", options(), "A");
        q.point = point;
        q
    }

    #[test]
    fn points_follow_option_position() {
        assert_eq!(answer_points(&options(), "A"), 3);
        assert_eq!(answer_points(&options(), "B"), 2);
        assert_eq!(answer_points(&options(), "C"), 1);
    }

    #[test]
    fn unknown_option_scores_one() {
        assert_eq!(answer_points(&options(), "Z"), 1);
        assert_eq!(answer_points(&[], "A"), 1);
    }

    #[test]
    fn points_ignore_canonical_answer() {
        // "C" is not the first option, so it scores 1 even when it is the right answer.
        let q = Question::new(1, "q", options(), "C");
        assert_eq!(answer_points(&q.options, &q.answer), 1);
    }

    #[test]
    fn total_treats_unset_points_as_zero() {
        let questions = vec![answered(Some(3)), answered(None), answered(Some(2))];
        assert_eq!(total_score(&questions), 5);
        assert_eq!(total_score(&[]), 0);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let questions = vec![answered(Some(u32::MAX)), answered(Some(3))];
        assert_eq!(total_score(&questions), u32::MAX);
        assert_eq!(score_questions(&questions).level, EffortLevel::High);
    }

    #[test]
    fn threshold_boundaries() {
        assert_eq!(EffortLevel::from_score(0), EffortLevel::Low);
        assert_eq!(EffortLevel::from_score(17), EffortLevel::Low);
        assert_eq!(EffortLevel::from_score(18), EffortLevel::Moderate);
        assert_eq!(EffortLevel::from_score(24), EffortLevel::Moderate);
        assert_eq!(EffortLevel::from_score(25), EffortLevel::High);
        assert_eq!(EffortLevel::from_score(u32::MAX), EffortLevel::High);
    }

    #[test]
    fn four_full_answers_are_low_effort() {
        let questions = vec![answered(Some(3)); 4];
        let summary = score_questions(&questions);
        assert_eq!(summary.score, 12);
        assert_eq!(summary.level, EffortLevel::Low);
        assert_eq!(summary.summary, EffortLevel::Low.summary());
    }

    #[test]
    fn twenty_is_moderate_and_thirty_is_high() {
        let twenty = vec![answered(Some(2)); 10];
        assert_eq!(score_questions(&twenty).level, EffortLevel::Moderate);

        let thirty = vec![answered(Some(3)); 10];
        let summary = score_questions(&thirty);
        assert_eq!(summary.score, 30);
        assert_eq!(summary.level, EffortLevel::High);
    }

    #[test]
    fn summaries_are_distinct() {
        assert_ne!(EffortLevel::Low.summary(), EffortLevel::Moderate.summary());
        assert_ne!(EffortLevel::Moderate.summary(), EffortLevel::High.summary());
    }

    #[test]
    fn effort_level_display() {
        assert_eq!(EffortLevel::Moderate.to_string(), "moderate");
        assert_eq!(EffortLevel::High.to_string(), "high");
    }
}
