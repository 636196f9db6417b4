//! Provider implementations for web search functionality.

use async_trait::async_trait;

use crate::errors::WebSearchError;
use crate::types::{SearchHit, SearchOptions};

pub mod demo;
pub mod google;
pub mod mock;

pub use demo::DemoProvider;
pub use google::GoogleHtmlProvider;
pub use mock::MockProvider;

/// Trait for web search providers.
///
/// Implementations supply raw result records through different backends
/// (scraped HTML results, canned demo data, mock providers for testing).
///
/// A provider call is atomic: on failure no partial hits are returned, and
/// every call restarts the search from scratch.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Search the web for `query`, honoring the limit and safe-search
    /// setting in `options`.
    ///
    /// # Errors
    /// - `WebSearchError::SearchFailed` - Search operation failed
    /// - `WebSearchError::NetworkError` - Network connectivity issues
    /// - `WebSearchError::ParseError` - Result markup could not be parsed
    /// - `WebSearchError::ProviderError` - Provider-specific error
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, WebSearchError>;
}
