//! Session transition commands: `select`, `answer`, `next`, `prev`,
//! `complete` and `reset`.

use std::path::PathBuf;

use anyhow::Result;

use quizstore_core::model::{Question, Quiz};
use quizstore_core::{Phase, QuizSession, Transition};

use super::open_session;

pub fn select(config_path: Option<PathBuf>, quiz_ref: String) -> Result<()> {
    let (_, mut session) = open_session(config_path)?;

    let quiz = find_quiz(&session.state().quizzes, &quiz_ref)
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!("no quiz matching '{quiz_ref}' (run `quizstore list` to see the catalog)")
        })?;

    session.select_quiz(&quiz)?;
    println!(
        "Started \"{}\" ({} questions)",
        quiz.title,
        quiz.questions.len()
    );
    print_position(&session);
    Ok(())
}

pub fn answer(config_path: Option<PathBuf>, question_id: i64, option: String) -> Result<()> {
    let (_, mut session) = open_session(config_path)?;

    let question = session
        .state()
        .questions
        .iter()
        .find(|q| q.id == question_id);
    let chosen = resolve_option(question, &option);

    match session.select_answer(question_id, &chosen)? {
        Transition::Applied => {
            let point = session
                .state()
                .questions
                .iter()
                .find(|q| q.id == question_id)
                .and_then(|q| q.point)
                .unwrap_or(0);
            println!("Recorded \"{chosen}\" for question {question_id} (+{point})");
        }
        Transition::Ignored if session.phase() != Phase::InProgress => not_in_progress(&session),
        Transition::Ignored => println!("No question with id {question_id} in this quiz."),
    }
    Ok(())
}

pub fn next(config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut session) = open_session(config_path)?;

    match session.go_next_question()? {
        Transition::Applied => print_position(&session),
        Transition::Ignored if session.phase() != Phase::InProgress => not_in_progress(&session),
        Transition::Ignored => {
            println!("Already at the last question. Run `quizstore complete` to finish.")
        }
    }
    Ok(())
}

pub fn previous(config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut session) = open_session(config_path)?;

    match session.go_previous_question()? {
        Transition::Applied => print_position(&session),
        Transition::Ignored if session.phase() != Phase::InProgress => not_in_progress(&session),
        Transition::Ignored => println!("Already at the first question."),
    }
    Ok(())
}

pub fn complete(config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut session) = open_session(config_path)?;

    match session.complete_questions()? {
        Transition::Applied => {
            let state = session.state();
            println!("Quiz completed. Score: {}", state.score);
            println!("{}", state.result_summary);
        }
        Transition::Ignored => not_in_progress(&session),
    }
    Ok(())
}

pub fn reset(config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut session) = open_session(config_path)?;
    session.reset()?;
    println!("Session reset.");
    Ok(())
}

/// Match a 1-based catalog position first, then a case-insensitive title.
fn find_quiz<'a>(quizzes: &'a [Quiz], quiz_ref: &str) -> Option<&'a Quiz> {
    if let Ok(n) = quiz_ref.trim().parse::<usize>() {
        if let Some(quiz) = n.checked_sub(1).and_then(|i| quizzes.get(i)) {
            return Some(quiz);
        }
    }
    quizzes
        .iter()
        .find(|q| q.title.eq_ignore_ascii_case(quiz_ref.trim()))
}

/// Exact option text wins; otherwise a 1-based option number is accepted.
fn resolve_option(question: Option<&Question>, input: &str) -> String {
    let Some(question) = question else {
        return input.to_string();
    };
    if question.option_position(input).is_some() {
        return input.to_string();
    }
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=question.options.len()).contains(&n) => question.options[n - 1].clone(),
        _ => input.to_string(),
    }
}

fn print_position(session: &QuizSession) {
    let state = session.state();
    if let Some(q) = state.current() {
        println!(
            "Question {} of {} (id {}): {}",
            state.current_question + 1,
            state.questions.len(),
            q.id,
            q.question
        );
    }
}

fn not_in_progress(session: &QuizSession) {
    match session.phase() {
        Phase::Idle => println!("No quiz in progress. Run `quizstore select <quiz>` first."),
        Phase::Completed => {
            println!("The quiz is already completed. Run `quizstore result` or `quizstore reset`.")
        }
        Phase::InProgress => {}
    }
}
