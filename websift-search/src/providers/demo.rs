//! Demo provider for development without network access.

use async_trait::async_trait;

use super::SearchProvider;
use crate::errors::WebSearchError;
use crate::types::{SearchHit, SearchOptions};

/// Demo provider returning canned hits.
///
/// Lets the full gateway workflow run offline: hits are synthesized from the
/// query so responses look plausible in the landing-page examples and during
/// UI work against the API.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchProvider for DemoProvider {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, WebSearchError> {
        let slug = query
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        let hits = (0..options.num_results)
            .map(|i| {
                if options.advanced {
                    SearchHit {
                        url: format!("https://example-{i}.com/{slug}"),
                        title: Some(format!("{query} - demo result {i}")),
                        description: Some(format!(
                            "Demo description for '{query}' (result {i})."
                        )),
                    }
                } else {
                    SearchHit::bare(format!("https://example-{i}.com/{slug}"))
                }
            })
            .collect();

        Ok(hits)
    }
}
