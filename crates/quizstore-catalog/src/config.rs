//! Configuration and catalog source factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizstore_core::persist::{Persistence, STORAGE_KEY};
use quizstore_core::store::FileStore;
use quizstore_core::traits::CatalogSource;

use crate::file::FileCatalog;
use crate::http::{HttpCatalog, DEFAULT_CATALOG_URL};

/// Top-level quizstore configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizstoreConfig {
    /// HTTP(S) URL or local path of the catalog document.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Directory holding the persisted session state.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Name of the persisted state entry.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}
fn default_state_dir() -> PathBuf {
    PathBuf::from("./.quizstore")
}
fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for QuizstoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            state_dir: default_state_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl QuizstoreConfig {
    /// Persistence backed by a [`FileStore`] in `state_dir`.
    pub fn persistence(&self) -> Persistence {
        Persistence::new(Arc::new(FileStore::new(&self.state_dir))).with_key(&self.storage_key)
    }

    /// Rebase relative local paths onto `base`.
    fn anchor_to(&mut self, base: &Path) {
        if self.state_dir.is_relative() {
            self.state_dir = base.join(&self.state_dir);
        }
        if !is_remote(&self.catalog_url) && Path::new(&self.catalog_url).is_relative() {
            self.catalog_url = base.join(&self.catalog_url).to_string_lossy().into_owned();
        }
    }
}

fn is_remote(catalog_url: &str) -> bool {
    catalog_url.starts_with("http://") || catalog_url.starts_with("https://")
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `quizstore.toml` in the current directory
/// 2. `~/.config/quizstore/config.toml`
///
/// Relative `state_dir` and catalog file paths in a config file are taken
/// relative to the file's directory. Environment variable overrides
/// (`QUIZSTORE_CATALOG_URL`, `QUIZSTORE_STATE_DIR`) are used as given.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizstoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizstore.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<QuizstoreConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            config.catalog_url = resolve_env_vars(&config.catalog_url);
            config.state_dir = PathBuf::from(resolve_env_vars(&config.state_dir.to_string_lossy()));
            if let Some(base) = path.parent() {
                config.anchor_to(base);
            }
            config
        }
        None => QuizstoreConfig::default(),
    };

    // Apply env var overrides
    if let Ok(url) = std::env::var("QUIZSTORE_CATALOG_URL") {
        config.catalog_url = url;
    }
    if let Ok(dir) = std::env::var("QUIZSTORE_STATE_DIR") {
        config.state_dir = PathBuf::from(dir);
    }

    anyhow::ensure!(
        !config.storage_key.is_empty(),
        "storage_key must not be empty"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizstore"))
}

/// Create a catalog source for `catalog_url`.
///
/// `http://` and `https://` URLs are fetched over the network; anything else
/// is treated as a path to a local catalog file.
pub fn create_source(catalog_url: &str) -> Box<dyn CatalogSource> {
    if is_remote(catalog_url) {
        Box::new(HttpCatalog::new(catalog_url))
    } else {
        Box::new(FileCatalog::new(catalog_url))
    }
}
