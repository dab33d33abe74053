//! Seams between the session and the outside world.
//!
//! [`CatalogSource`] is implemented by the `quizstore-catalog` crate;
//! [`StateStore`] has file and in-memory implementations in [`crate::store`].

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::QuizCatalog;

// ---------------------------------------------------------------------------
// Catalog source trait
// ---------------------------------------------------------------------------

/// Where the quiz catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the whole catalog document once.
    async fn fetch_catalog(&self) -> anyhow::Result<QuizCatalog>;
}

// ---------------------------------------------------------------------------
// State store trait
// ---------------------------------------------------------------------------

/// Named string entries that survive the process, like browser local storage.
pub trait StateStore: Send + Sync {
    /// Read the entry stored under `key`, or `None` if nothing was written yet.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the entry stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
