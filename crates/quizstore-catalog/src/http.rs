//! HTTP catalog source.

use async_trait::async_trait;
use tracing::instrument;

use quizstore_core::model::QuizCatalog;
use quizstore_core::traits::CatalogSource;

use crate::error::CatalogError;

/// Where the development server serves the catalog.
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:3000/data.json";

/// Fetches the catalog document with a single `GET`.
///
/// No timeout, retry, or deduplication: one call, one request.
pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(url: &str) -> Self {
        let url = if url.is_empty() {
            DEFAULT_CATALOG_URL
        } else {
            url
        };

        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Catalog at `data.json` under a site root, e.g. `https://example.com/`.
    pub fn from_site(base_url: &str) -> Self {
        Self::new(&format!("{}/data.json", base_url.trim_end_matches('/')))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_catalog(&self) -> anyhow::Result<QuizCatalog> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    CatalogError::Network(format!("catalog server not reachable at {}", self.url))
                } else {
                    CatalogError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Http {
                status,
                message: body,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let catalog =
            QuizCatalog::from_json(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::debug!(quizzes = catalog.quizzes.len(), "catalog document parsed");
        Ok(catalog)
    }
}
