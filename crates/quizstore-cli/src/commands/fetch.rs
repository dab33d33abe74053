//! The `quizstore fetch` command.

use std::path::PathBuf;

use anyhow::Result;

use quizstore_catalog::create_source;
use quizstore_core::Transition;

use super::open_session;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (config, mut session) = open_session(config_path)?;
    let source = create_source(&config.catalog_url);

    match session.fetch_quizzes(&*source).await? {
        Transition::Applied => {
            println!(
                "Loaded {} quizzes from {}",
                session.state().quizzes.len(),
                config.catalog_url
            );
        }
        Transition::Ignored => {
            println!(
                "Could not load quizzes from {}; keeping {} cached.",
                config.catalog_url,
                session.state().quizzes.len()
            );
        }
    }

    Ok(())
}
