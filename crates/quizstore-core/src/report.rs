//! Result report for a completed quiz, with JSON persistence and a plain-text
//! rendering for terminals.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::EffortLevel;
use crate::session::{Phase, SessionState};

/// Everything the result page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultReport {
    pub quiz_title: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub score: u32,
    /// Score reachable by always picking the first option.
    pub max_score: u32,
    pub level: EffortLevel,
    pub summary: String,
    pub questions: Vec<QuestionOutcome>,
}

/// How one question was answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub id: i64,
    pub question: String,
    pub selected_answer: Option<String>,
    pub point: Option<u32>,
    pub answer: String,
}

impl ResultReport {
    /// Build a report from a completed session, or `None` if it is not completed.
    pub fn from_session(state: &SessionState) -> Option<Self> {
        if state.phase() != Phase::Completed {
            return None;
        }
        let quiz = state.selected_quiz.as_ref()?;

        let questions = state
            .questions
            .iter()
            .map(|q| QuestionOutcome {
                id: q.id,
                question: q.question.clone(),
                selected_answer: q.user_selected_answer.clone(),
                point: q.point,
                answer: q.answer.clone(),
            })
            .collect();

        Some(Self {
            quiz_title: quiz.title.clone(),
            icon: quiz.icon.clone(),
            created_at: Utc::now(),
            score: state.score,
            max_score: quiz.max_score(),
            level: EffortLevel::from_score(state.score),
            summary: state.result_summary.clone(),
            questions,
        })
    }

    /// Number of questions that received an answer.
    pub fn answered(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.selected_answer.is_some())
            .count()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ResultReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Render as plain text for a terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.quiz_title);
        let _ = writeln!(
            out,
            "Score: {}/{} ({} effort)",
            self.score, self.max_score, self.level
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.summary);
        let _ = writeln!(out);

        for q in &self.questions {
            let chosen = q.selected_answer.as_deref().unwrap_or("-");
            let point = q
                .point
                .map(|p| format!("+{p}"))
                .unwrap_or_else(|| "+0".to_string());
            let _ = writeln!(out, "  {:>3}. {}  [{chosen}] {point}", q.id, q.question);
        }
        out
    }
}
