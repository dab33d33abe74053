//! Mock catalog source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use quizstore_core::model::QuizCatalog;
use quizstore_core::traits::CatalogSource;

use crate::error::CatalogError;

/// A catalog source that never touches the network.
///
/// Returns a fixed catalog, or fails every call with a network error.
pub struct MockCatalog {
    catalog: Option<QuizCatalog>,
    call_count: AtomicU32,
}

impl MockCatalog {
    /// Create a mock that always returns `catalog`.
    pub fn new(catalog: QuizCatalog) -> Self {
        Self {
            catalog: Some(catalog),
            call_count: AtomicU32::new(0),
        }
    }

    /// Create a mock whose every fetch fails.
    pub fn failing() -> Self {
        Self {
            catalog: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_catalog(&self) -> anyhow::Result<QuizCatalog> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.catalog {
            Some(catalog) => Ok(catalog.clone()),
            None => Err(CatalogError::Network("mock catalog is offline".into()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use quizstore_core::model::Quiz;
    use quizstore_core::store::MemoryStore;
    use quizstore_core::{Persistence, QuizSession, Transition};

    fn catalog() -> QuizCatalog {
        QuizCatalog {
            quizzes: vec![Quiz {
                title: "JavaScript".into(),
                icon: "js.svg".into(),
                questions: vec![],
            }],
        }
    }

    #[tokio::test]
    async fn session_loads_from_mock() {
        let source = MockCatalog::new(catalog());
        let mut session = QuizSession::new(Persistence::new(Arc::new(MemoryStore::new())));

        let outcome = session.fetch_quizzes(&source).await.unwrap();
        assert_eq!(outcome, Transition::Applied);
        assert_eq!(session.state().quizzes, catalog().quizzes);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn failing_mock_keeps_previous_catalog() {
        let store = Arc::new(MemoryStore::new());
        let mut session = QuizSession::new(Persistence::new(store.clone()));
        session.fetch_quizzes(&MockCatalog::new(catalog())).await.unwrap();

        let failing = MockCatalog::failing();
        let outcome = session.fetch_quizzes(&failing).await.unwrap();
        assert_eq!(outcome, Transition::Ignored);
        assert_eq!(session.state().quizzes.len(), 1);
        assert_eq!(failing.call_count(), 1);
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn repeated_fetches_hit_the_source_each_time() {
        let source = MockCatalog::new(catalog());
        let mut session = QuizSession::new(Persistence::new(Arc::new(MemoryStore::new())));
        session.fetch_quizzes(&source).await.unwrap();
        session.fetch_quizzes(&source).await.unwrap();
        assert_eq!(source.call_count(), 2);
    }
}
