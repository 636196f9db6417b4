//! Websift Search - Web search provider abstraction

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides the search capability behind the Websift gateway: a provider
//! trait with a production Google HTML scraper, a demo provider for offline
//! development, and a configurable mock for tests.

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::WebSearchError;
pub use providers::{DemoProvider, GoogleHtmlProvider, MockProvider, SearchProvider};
pub use service::WebSearchService;
pub use types::{SearchHit, SearchOptions};

/// Convenience type alias for Results with WebSearchError.
pub type Result<T> = std::result::Result<T, WebSearchError>;
