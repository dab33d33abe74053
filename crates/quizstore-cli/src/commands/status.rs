//! The `quizstore status` command.

use std::path::PathBuf;

use anyhow::Result;

use quizstore_core::{Phase, SessionState};

use super::open_session;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, session) = open_session(config_path)?;
    print!("{}", render(session.state()));
    Ok(())
}

fn render(state: &SessionState) -> String {
    let mut out = format!(
        "Phase: {}\nCatalog: {} quizzes\n",
        state.phase(),
        state.quizzes.len()
    );

    let Some(quiz) = &state.selected_quiz else {
        out.push_str("No quiz selected.\n");
        return out;
    };

    out.push_str(&format!(
        "Quiz: {} ({} of {} answered)\n",
        quiz.title,
        state.answered_count(),
        state.questions.len()
    ));

    if state.phase() == Phase::Completed {
        out.push_str(&format!(
            "Score: {}\nRun `quizstore result` for details.\n",
            state.score
        ));
        return out;
    }

    if let Some(q) = state.current() {
        out.push_str(&format!(
            "\nQuestion {} of {} (id {}): {}\n",
            state.current_question + 1,
            state.questions.len(),
            q.id,
            q.question
        ));
        for (i, option) in q.options.iter().enumerate() {
            let marker = if q.user_selected_answer.as_deref() == Some(option.as_str()) {
                " <- your answer"
            } else {
                ""
            };
            out.push_str(&format!("  {}) {option}{marker}\n", i + 1));
        }
    }
    out
}
