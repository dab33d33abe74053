//! Local JSON file catalog source.

use std::path::PathBuf;

use async_trait::async_trait;

use quizstore_core::model::QuizCatalog;
use quizstore_core::traits::CatalogSource;

use crate::error::CatalogError;

/// Reads the catalog document from disk, for offline use.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_catalog(&self) -> anyhow::Result<QuizCatalog> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let catalog =
            QuizCatalog::from_json(&content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(catalog)
    }
}
