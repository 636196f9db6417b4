//! Google HTML search provider for production use.
//!
//! Scrapes the plain-HTML results page Google serves to console browsers.
//! No API key is required; the trade-off is that the markup is versioned by
//! Google and the selectors below track the current console layout.

use async_trait::async_trait;
use scraper::{Html, Selector};

use super::SearchProvider;
use crate::errors::WebSearchError;
use crate::types::{SearchHit, SearchOptions};

/// User agent for the console-HTML variant of the results page.
const USER_AGENT: &str =
    "Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 OpenSSL/1.1.1 (compatible; websift/0.1)";

/// CSS selectors for the console results layout.
const RESULT_SELECTOR: &str = "div.ezO2md";
const LINK_SELECTOR: &str = "a[href]";
const TITLE_SELECTOR: &str = "span.CVA68e";
const DESCRIPTION_SELECTOR: &str = "span.FrIlee";

/// Google web search provider scraping the HTML results page.
#[derive(Debug)]
pub struct GoogleHtmlProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleHtmlProvider {
    /// Creates a new provider pointed at google.com.
    pub fn new() -> Self {
        Self::with_base_url("https://www.google.com/search".to_string())
    }

    /// Creates a provider with a custom results-page URL (used in tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Unwrap a result link into a plain URL.
    ///
    /// Result anchors carry either a direct `http(s)` URL or a redirect of
    /// the form `/url?q=<encoded>&sa=...`; anything else (internal
    /// navigation, image links) is discarded.
    fn unwrap_link(href: &str) -> Option<String> {
        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_string());
        }

        let encoded = href.strip_prefix("/url?q=")?;
        let encoded = encoded.split('&').next()?;
        let decoded = urlencoding::decode(encoded).ok()?;
        if decoded.is_empty() {
            return None;
        }
        Some(decoded.into_owned())
    }

    /// Parse one results page into hits.
    ///
    /// Kept synchronous and self-contained: `scraper::Html` is not `Send`,
    /// so it must never be held across an await point.
    fn parse_results(html: &str, advanced: bool) -> Result<Vec<SearchHit>, WebSearchError> {
        let selector = |css: &str| {
            Selector::parse(css).map_err(|e| WebSearchError::ParseError {
                reason: format!("invalid selector '{css}': {e}"),
            })
        };

        let result_selector = selector(RESULT_SELECTOR)?;
        let link_selector = selector(LINK_SELECTOR)?;
        let title_selector = selector(TITLE_SELECTOR)?;
        let description_selector = selector(DESCRIPTION_SELECTOR)?;

        let document = Html::parse_document(html);
        let mut hits = Vec::new();

        for block in document.select(&result_selector) {
            let Some(anchor) = block.select(&link_selector).next() else {
                continue;
            };
            let Some(url) = anchor.value().attr("href").and_then(Self::unwrap_link) else {
                continue;
            };

            if advanced {
                let text_of = |sel: &Selector| {
                    block
                        .select(sel)
                        .next()
                        .map(|el| el.text().collect::<String>().trim().to_string())
                        .filter(|s| !s.is_empty())
                };
                hits.push(SearchHit {
                    url,
                    title: text_of(&title_selector),
                    description: text_of(&description_selector),
                });
            } else {
                hits.push(SearchHit::bare(url));
            }
        }

        Ok(hits)
    }

    async fn fetch_page(
        &self,
        query: &str,
        options: &SearchOptions,
        start: usize,
    ) -> Result<String, WebSearchError> {
        // Ask for a couple of extra results per page; Google trims freely.
        let num = (options.num_results + 2).to_string();
        let start_param = start.to_string();
        let params = [
            ("q", query),
            ("num", num.as_str()),
            ("start", start_param.as_str()),
            ("safe", options.safe.as_str()),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .header("User-Agent", USER_AGENT)
            .query(&params)
            .send()
            .await
            .map_err(|e| WebSearchError::NetworkError {
                reason: format!("Google request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(WebSearchError::SearchFailed {
                query: query.to_string(),
                reason: format!("Google HTTP {}", response.status()),
            });
        }

        response.text().await.map_err(|e| WebSearchError::NetworkError {
            reason: format!("Failed to read Google response: {e}"),
        })
    }
}

impl Default for GoogleHtmlProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for GoogleHtmlProvider {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, WebSearchError> {
        let mut hits: Vec<SearchHit> = Vec::new();
        let mut start = 0;

        while hits.len() < options.num_results {
            let body = self.fetch_page(query, options, start).await?;
            let page_hits = Self::parse_results(&body, options.advanced)?;

            if page_hits.is_empty() {
                // Exhausted: Google returned a page with no result blocks.
                break;
            }

            start += page_hits.len();
            hits.extend(page_hits);
        }

        hits.truncate(options.num_results);
        tracing::debug!(query, count = hits.len(), "google search complete");
        Ok(hits)
    }
}
