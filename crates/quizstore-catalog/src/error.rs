//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the quiz catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The server answered with an error status.
    #[error("catalog request failed (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not a `{ "quizzes": [...] }` document.
    #[error("malformed catalog document: {0}")]
    Parse(String),

    /// A local catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
