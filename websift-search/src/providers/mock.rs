//! Mock provider for testing.

use async_trait::async_trait;

use super::SearchProvider;
use crate::errors::WebSearchError;
use crate::types::{SearchHit, SearchOptions};

/// Mock provider returning preconfigured hits or a forced failure.
///
/// Public (not test-gated) so downstream crates can drive their endpoint
/// tests through it.
#[derive(Debug, Default)]
pub struct MockProvider {
    hits: Vec<SearchHit>,
    failure: Option<String>,
}

impl MockProvider {
    /// Creates a mock that returns the given hits, capped at the
    /// requested `num_results`.
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            failure: None,
        }
    }

    /// Creates a mock whose every search fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            hits: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, WebSearchError> {
        if let Some(reason) = &self.failure {
            return Err(WebSearchError::SearchFailed {
                query: query.to_string(),
                reason: reason.clone(),
            });
        }

        let mut hits = self.hits.clone();
        hits.truncate(options.num_results);
        Ok(hits)
    }
}
