//! quizstore-catalog — Quiz catalog sources and configuration.
//!
//! Implements the `CatalogSource` trait for HTTP endpoints and local JSON
//! files, and loads the `quizstore.toml` configuration that picks between them.

pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config_from, QuizstoreConfig};
pub use error::CatalogError;
