//! The `quizstore result` command.

use std::path::PathBuf;

use anyhow::Result;

use quizstore_core::report::ResultReport;
use quizstore_report::html::{generate_html, write_html_report};

use super::open_session;

pub fn execute(config_path: Option<PathBuf>, format: String, output: Option<PathBuf>) -> Result<()> {
    let (_, session) = open_session(config_path)?;

    let report = ResultReport::from_session(session.state()).ok_or_else(|| {
        anyhow::anyhow!("no completed quiz; answer the questions and run `quizstore complete` first")
    })?;

    match (format.as_str(), output) {
        ("json", Some(path)) => {
            report.save_json(&path)?;
            eprintln!("Result saved to: {}", path.display());
        }
        ("json", None) => println!("{}", serde_json::to_string_pretty(&report)?),
        ("html", Some(path)) => {
            write_html_report(&report, &path)?;
            eprintln!("HTML result: {}", path.display());
        }
        ("html", None) => println!("{}", generate_html(&report)),
        ("text", Some(path)) => {
            std::fs::write(&path, report.to_text())?;
            eprintln!("Result saved to: {}", path.display());
        }
        ("text", None) => print!("{}", report.to_text()),
        (other, _) => anyhow::bail!("unknown format: {other} (expected text, json or html)"),
    }

    Ok(())
}
