//! The quiz session state machine.
//!
//! ```text
//! Idle ──select_quiz──▶ InProgress ──complete_questions──▶ Completed
//!   ▲                      │  ▲                                │
//!   └──────── reset ───────┘  └───────── select_quiz ──────────┘
//! ```
//!
//! Every accepted transition writes a full snapshot through the injected
//! [`Persistence`]. Transitions that do not apply in the current phase, or
//! that would move the question pointer out of bounds, are ignored and leave
//! both the state and the store untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreError;
use crate::model::{Question, Quiz};
use crate::persist::Persistence;
use crate::scoring::{answer_points, score_questions, MAX_POINTS_PER_QUESTION};
use crate::traits::CatalogSource;

/// Everything the UI reads, and everything that gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// The catalog as last loaded.
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    /// Working copy of the selected quiz's questions.
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, rename = "selectedQuizz")]
    pub selected_quiz: Option<Quiz>,
    /// Index into `questions`; 0 when `questions` is empty.
    #[serde(default)]
    pub current_question: usize,
    #[serde(default)]
    pub has_complete_all: bool,
    /// Only meaningful once `has_complete_all` is set.
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub result_summary: String,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.has_complete_all {
            Phase::Completed
        } else if self.selected_quiz.is_some() {
            Phase::InProgress
        } else {
            Phase::Idle
        }
    }

    /// The question the pointer is on, if any.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question + 1 >= self.questions.len()
    }

    /// Repair a state read back from storage.
    ///
    /// An out-of-range question pointer goes back to 0. A point value that
    /// answering could not have produced is recomputed from the stored
    /// answer, or cleared when there is none.
    pub(crate) fn normalized(mut self) -> Self {
        if self.current_question >= self.questions.len() {
            self.current_question = 0;
        }
        for q in &mut self.questions {
            let Some(point) = q.point else { continue };
            if (1..=MAX_POINTS_PER_QUESTION).contains(&point) {
                continue;
            }
            let repaired = q
                .user_selected_answer
                .as_deref()
                .map(|answer| answer_points(&q.options, answer));
            tracing::warn!(question_id = q.id, point, ?repaired, "stored point value out of range");
            q.point = repaired;
        }
        self
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    InProgress,
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Completed => write!(f, "completed"),
        }
    }
}

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed and was persisted.
    Applied,
    /// Nothing changed and nothing was written.
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

/// A quiz session that owns its state and persists it after each change.
pub struct QuizSession {
    state: SessionState,
    persistence: Persistence,
}

impl QuizSession {
    /// Start from the empty state without reading storage.
    pub fn new(persistence: Persistence) -> Self {
        Self {
            state: SessionState::default(),
            persistence,
        }
    }

    /// Start from whatever `persistence` has stored, or the empty state.
    pub fn open(persistence: Persistence) -> Self {
        let state = persistence.load();
        tracing::debug!(
            phase = %state.phase(),
            quizzes = state.quizzes.len(),
            "session hydrated"
        );
        Self { state, persistence }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Load the catalog from `source`, replacing the current one.
    ///
    /// A failed fetch is logged and reported as [`Transition::Ignored`]; the
    /// old catalog stays in place. No retries are attempted.
    pub async fn fetch_quizzes(
        &mut self,
        source: &dyn CatalogSource,
    ) -> Result<Transition, StoreError> {
        let catalog = match source.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(source = source.name(), error = %format!("{e:#}"), "failed to load quiz catalog");
                return Ok(Transition::Ignored);
            }
        };

        tracing::info!(
            source = source.name(),
            quizzes = catalog.quizzes.len(),
            "quiz catalog loaded"
        );
        self.state.quizzes = catalog.quizzes;
        self.state.has_complete_all = false;
        self.commit()
    }

    /// Make `quiz` the active quiz with a fresh copy of its questions.
    ///
    /// The question pointer is kept when it still fits the new quiz; callers
    /// that want to start from the top should [`reset`](Self::reset) first.
    pub fn select_quiz(&mut self, quiz: &Quiz) -> Result<Transition, StoreError> {
        self.state.questions = quiz.questions.clone();
        self.state.selected_quiz = Some(quiz.clone());
        self.state.has_complete_all = false;
        if self.state.current_question >= self.state.questions.len() {
            self.state.current_question = 0;
        }

        tracing::info!(
            quiz = %quiz.title,
            questions = quiz.questions.len(),
            "quiz selected"
        );
        self.commit()
    }

    /// Record `selected_answer` for the question with `question_id`.
    ///
    /// Points come from the option's position (3, 2, then 1). The correctness
    /// flag is always set to `true`, whatever the canonical answer is.
    /// Answering again overwrites the previous answer.
    pub fn select_answer(
        &mut self,
        question_id: i64,
        selected_answer: &str,
    ) -> Result<Transition, StoreError> {
        if self.phase() != Phase::InProgress {
            return Ok(self.ignore("select_answer"));
        }

        let Some(index) = self
            .state
            .questions
            .iter()
            .position(|q| q.id == question_id)
        else {
            tracing::debug!(question_id, "unknown question id, answer ignored");
            return Ok(Transition::Ignored);
        };

        let mut updated = self.state.questions[index].clone();
        let point = answer_points(&updated.options, selected_answer);
        updated.is_correct_user_answer = Some(true);
        updated.point = Some(point);
        updated.user_selected_answer = Some(selected_answer.to_string());
        self.state.questions[index] = updated;

        tracing::info!(question_id, point, "answer recorded");
        self.commit()
    }

    /// Move to the next question. Does nothing on the last one.
    pub fn go_next_question(&mut self) -> Result<Transition, StoreError> {
        if self.phase() != Phase::InProgress {
            return Ok(self.ignore("go_next_question"));
        }

        let next = self.state.current_question + 1;
        if next >= self.state.questions.len() {
            return Ok(self.ignore("go_next_question"));
        }

        self.state.current_question = next;
        self.commit()
    }

    /// Move to the previous question. Does nothing on the first one.
    pub fn go_previous_question(&mut self) -> Result<Transition, StoreError> {
        if self.phase() != Phase::InProgress {
            return Ok(self.ignore("go_previous_question"));
        }

        let Some(previous) = self.state.current_question.checked_sub(1) else {
            return Ok(self.ignore("go_previous_question"));
        };

        self.state.current_question = previous;
        self.commit()
    }

    /// Score the working questions and mark the session completed.
    pub fn complete_questions(&mut self) -> Result<Transition, StoreError> {
        if self.phase() != Phase::InProgress {
            return Ok(self.ignore("complete_questions"));
        }

        let result = score_questions(&self.state.questions);
        self.state.score = result.score;
        self.state.result_summary = result.summary;
        self.state.current_question = 0;
        self.state.has_complete_all = true;

        tracing::info!(score = result.score, level = %result.level, "quiz completed");
        self.commit()
    }

    /// Drop the active quiz and return to idle.
    ///
    /// The catalog, score and result summary survive; the next completion
    /// overwrites the latter two.
    pub fn reset(&mut self) -> Result<Transition, StoreError> {
        self.state.current_question = 0;
        self.state.questions.clear();
        self.state.has_complete_all = false;
        self.state.selected_quiz = None;

        tracing::info!("session reset");
        self.commit()
    }

    fn commit(&mut self) -> Result<Transition, StoreError> {
        self.persistence.save(&self.state)?;
        Ok(Transition::Applied)
    }

    fn ignore(&self, operation: &str) -> Transition {
        tracing::debug!(
            operation,
            phase = %self.phase(),
            current = self.state.current_question,
            "transition ignored"
        );
        Transition::Ignored
    }
}
