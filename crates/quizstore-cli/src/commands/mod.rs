pub mod fetch;
pub mod init;
pub mod list;
pub mod play;
pub mod result;
pub mod status;

use std::path::PathBuf;

use anyhow::Result;

use quizstore_catalog::config::{load_config_from, QuizstoreConfig};
use quizstore_core::QuizSession;

/// Load the config and hydrate the session it points at.
pub(crate) fn open_session(config_path: Option<PathBuf>) -> Result<(QuizstoreConfig, QuizSession)> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!(
        catalog = %config.catalog_url,
        state_dir = %config.state_dir.display(),
        "config loaded"
    );
    let session = QuizSession::open(config.persistence());
    Ok((config, session))
}
