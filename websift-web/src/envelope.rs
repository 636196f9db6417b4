//! Custom Search-shaped response envelope.
//!
//! Field names and the static filler values (context title, cx id,
//! placeholder thumbnail) mirror the Google Custom Search JSON API so
//! existing clients of that schema can consume gateway responses unchanged.
//! Total-result counts are fabricated, not computed.

use serde::Serialize;
use url::Url;
use websift_search::SearchHit;

const ENVELOPE_KIND: &str = "customsearch#search";
const RESULT_KIND: &str = "customsearch#result";
const CONTEXT_TITLE: &str = "Custom Search Engine";
const CX_ID: &str = "fake-cx-id-1234567890";
const THUMBNAIL_SRC: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcT_M-A8n58a22s3YX-1g_L-Lq-Yg_w-Z7kLg&s";

/// Minimal result record returned when `advanced` is off.
///
/// Title and description are always serialized as `null`; basic mode never
/// carries metadata.
#[derive(Debug, Serialize)]
pub struct BasicResult {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl BasicResult {
    /// Reduces a hit to its URL.
    pub fn from_hit(hit: &SearchHit) -> Self {
        Self {
            url: hit.url.clone(),
            title: None,
            description: None,
        }
    }
}

/// One enriched result item in the `items` array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub kind: &'static str,
    pub title: Option<String>,
    pub html_title: String,
    pub link: String,
    pub display_link: String,
    pub snippet: Option<String>,
    pub html_snippet: String,
    pub formatted_url: String,
    pub html_formatted_url: String,
    pub pagemap: PageMap,
}

/// Pagemap block carrying the placeholder thumbnail and echoed metatags.
#[derive(Debug, Serialize)]
pub struct PageMap {
    pub cse_thumbnail: Vec<Thumbnail>,
    pub metatags: Vec<MetaTags>,
}

/// Static placeholder thumbnail entry.
#[derive(Debug, Serialize)]
pub struct Thumbnail {
    pub src: &'static str,
    pub width: &'static str,
    pub height: &'static str,
}

/// Open Graph tags echoing the item's own title and description.
#[derive(Debug, Serialize)]
pub struct MetaTags {
    #[serde(rename = "og:title")]
    pub og_title: Option<String>,
    #[serde(rename = "og:description")]
    pub og_description: Option<String>,
}

impl ResultItem {
    /// Builds an enriched item from a hit.
    ///
    /// Returns `None` for hits with an empty URL; those are dropped from
    /// the response rather than producing half-formed items.
    pub fn from_hit(hit: &SearchHit) -> Option<Self> {
        if hit.url.is_empty() {
            return None;
        }

        let display_link = Url::parse(&hit.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();

        let title_text = hit.title.clone().unwrap_or_default();
        let description_text = hit.description.clone().unwrap_or_default();

        Some(Self {
            kind: RESULT_KIND,
            title: hit.title.clone(),
            html_title: format!("<b>{title_text}</b>"),
            link: hit.url.clone(),
            display_link,
            snippet: hit.description.clone(),
            html_snippet: format!(
                "This is a sample snippet. The description is: <b>{description_text}</b>"
            ),
            formatted_url: hit.url.clone(),
            html_formatted_url: hit.url.clone(),
            pagemap: PageMap {
                cse_thumbnail: vec![Thumbnail {
                    src: THUMBNAIL_SRC,
                    width: "225",
                    height: "225",
                }],
                metatags: vec![MetaTags {
                    og_title: hit.title.clone(),
                    og_description: hit.description.clone(),
                }],
            },
        })
    }
}

/// Context block naming the (pretend) engine.
#[derive(Debug, Serialize)]
pub struct Context {
    pub title: &'static str,
}

/// Description of the current or next page of a query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescription {
    pub title: String,
    pub total_results: String,
    pub search_terms: String,
    pub count: usize,
    pub start_index: usize,
    pub input_encoding: &'static str,
    pub output_encoding: &'static str,
    pub safe: String,
    pub cx: &'static str,
}

/// The `queries` block: one request descriptor and one cosmetic next page.
#[derive(Debug, Serialize)]
pub struct Queries {
    pub request: Vec<QueryDescription>,
    #[serde(rename = "nextPage")]
    pub next_page: Vec<QueryDescription>,
}

/// Timing and (fabricated) total-count block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInformation {
    pub search_time: f64,
    pub formatted_search_time: String,
    pub total_results: String,
    pub formatted_total_results: String,
}

/// Full response envelope for advanced-mode searches.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    pub kind: &'static str,
    pub context: Context,
    pub queries: Queries,
    pub search_information: SearchInformation,
    pub items: Vec<ResultItem>,
}

impl SearchEnvelope {
    /// Assembles the envelope around the mapped items.
    ///
    /// `total_results` is the fabricated placeholder count; `search_time`
    /// is wall-clock seconds from invocation to completion of mapping.
    pub fn build(
        query: &str,
        safe: &str,
        num_results: usize,
        items: Vec<ResultItem>,
        search_time: f64,
        total_results: u64,
    ) -> Self {
        let total = total_results.to_string();

        let request = QueryDescription {
            title: format!("Search for {query}"),
            total_results: total.clone(),
            search_terms: query.to_string(),
            count: items.len(),
            start_index: 1,
            input_encoding: "utf8",
            output_encoding: "utf8",
            safe: safe.to_string(),
            cx: CX_ID,
        };

        let next_page = QueryDescription {
            title: format!("Next page for {query}"),
            count: num_results,
            start_index: 1 + num_results,
            ..request.clone()
        };

        Self {
            kind: ENVELOPE_KIND,
            context: Context {
                title: CONTEXT_TITLE,
            },
            queries: Queries {
                request: vec![request],
                next_page: vec![next_page],
            },
            search_information: SearchInformation {
                search_time,
                formatted_search_time: format!("{search_time:.2}"),
                total_results: total,
                formatted_total_results: format_thousands(total_results),
            },
            items,
        }
    }
}

/// Formats an integer with comma thousands separators ("125,000").
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
