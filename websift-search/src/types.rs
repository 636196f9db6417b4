//! Data types for web search functionality.

use serde::{Deserialize, Serialize};

/// Single raw result record from a search provider.
///
/// Basic-mode providers only fill `url`; advanced mode also carries the
/// page title and description snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SearchHit {
    /// Creates a bare hit carrying only a URL.
    pub fn bare(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            description: None,
        }
    }
}

/// Options forwarded to a provider alongside the query string.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of hits the caller wants back.
    pub num_results: usize,
    /// Safe-search setting, passed through verbatim ("off" or "active").
    pub safe: String,
    /// Whether the caller needs titles and descriptions, not just URLs.
    pub advanced: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            num_results: 10,
            safe: "off".to_string(),
            advanced: false,
        }
    }
}
