//! Persistence error types.
//!
//! Catalog failures never reach the session caller (they are logged and
//! swallowed), so the only errors a transition can return come from writing
//! the state snapshot.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing persisted session state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("state store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session state could not be serialized.
    #[error("failed to serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage key cannot be used as an entry name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Another thread panicked while holding the store lock.
    #[error("state store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
