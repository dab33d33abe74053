//! The `quizstore list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::open_session;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, session) = open_session(config_path)?;
    let state = session.state();

    if state.quizzes.is_empty() {
        println!("No quizzes loaded. Run `quizstore fetch` first.");
        return Ok(());
    }

    let selected = state.selected_quiz.as_ref().map(|q| q.title.as_str());

    let mut table = Table::new();
    table.set_header(vec!["#", "Title", "Icon", "Questions", ""]);
    for (i, quiz) in state.quizzes.iter().enumerate() {
        let marker = if selected == Some(quiz.title.as_str()) {
            "selected"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&quiz.title),
            Cell::new(&quiz.icon),
            Cell::new(quiz.questions.len()),
            Cell::new(marker),
        ]);
    }

    println!("{table}");
    Ok(())
}
