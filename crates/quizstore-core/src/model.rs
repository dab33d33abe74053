//! Core data model types for quizstore.
//!
//! Field names serialize in camelCase so the catalog document served over the
//! network and the persisted session blob share one shape.

use serde::{Deserialize, Serialize};

use crate::scoring::MAX_POINTS_PER_QUESTION;

/// A single multiple-choice question.
///
/// The answer fields stay `None` in catalog (template) data and are filled in
/// on the session's working copy as the user answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, unique within its quiz.
    pub id: i64,
    /// Prompt text.
    pub question: String,
    /// Options in display order. Position drives the point value.
    pub options: Vec<String>,
    /// Canonical correct answer.
    pub answer: String,
    /// Points awarded by the last answer event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<u32>,
    /// Set on every answer event, see [`crate::session::QuizSession::select_answer`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct_user_answer: Option<bool>,
    /// The option the user picked last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_selected_answer: Option<String>,
}

impl Question {
    /// Create an unanswered question.
    pub fn new(
        id: i64,
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            answer: answer.into(),
            point: None,
            is_correct_user_answer: None,
            user_selected_answer: None,
        }
    }

    /// Whether an answer has been recorded for this question.
    pub fn is_answered(&self) -> bool {
        self.user_selected_answer.is_some()
    }

    /// Position of `option` within [`Question::options`].
    pub fn option_position(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }
}

/// A titled set of questions as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    /// Icon reference (path or URL), opaque to the core.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Highest score reachable by answering every question with its first option.
    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * MAX_POINTS_PER_QUESTION
    }
}

/// The catalog document: `{ "quizzes": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCatalog {
    pub quizzes: Vec<Quiz>,
}

impl QuizCatalog {
    /// Parse a catalog document from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Find a quiz by title, ignoring ASCII case.
    pub fn find_by_title(&self, title: &str) -> Option<&Quiz> {
        self.quizzes
            .iter()
            .find(|q| q.title.eq_ignore_ascii_case(title))
    }
}
