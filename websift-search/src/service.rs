//! Web search service wrapping a provider.
//!
//! The gateway talks to this service rather than a concrete provider, so the
//! production scraper, the offline demo data, and test mocks are all
//! interchangeable behind one seam.

use crate::errors::WebSearchError;
use crate::providers::{DemoProvider, GoogleHtmlProvider, SearchProvider};
use crate::types::{SearchHit, SearchOptions};

/// Web search service delegating to a pluggable provider.
#[derive(Debug)]
pub struct WebSearchService {
    provider: Box<dyn SearchProvider>,
}

impl WebSearchService {
    /// Creates a service backed by the production Google provider.
    pub fn new() -> Self {
        Self {
            provider: Box::new(GoogleHtmlProvider::new()),
        }
    }

    /// Creates a service backed by canned demo data (no network access).
    pub fn new_demo() -> Self {
        Self {
            provider: Box::new(DemoProvider::new()),
        }
    }

    /// Creates a service backed by an arbitrary provider.
    pub fn with_provider(provider: Box<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Search the web for `query`.
    ///
    /// # Errors
    /// - `WebSearchError::SearchFailed` - Failed to query the provider
    /// - `WebSearchError::NetworkError` - Network connectivity issues
    /// - `WebSearchError::ParseError` - Provider response unparseable
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, WebSearchError> {
        tracing::debug!(
            query,
            num_results = options.num_results,
            advanced = options.advanced,
            "dispatching search"
        );
        self.provider.search(query, options).await
    }
}

impl Default for WebSearchService {
    fn default() -> Self {
        Self::new()
    }
}
