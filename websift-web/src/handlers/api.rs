//! Search API handler: authorize, coerce, invoke, reshape.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use rand::Rng;
use serde_json::{Value, json};
use websift_search::SearchOptions;

use crate::auth::authorized;
use crate::envelope::{BasicResult, ResultItem, SearchEnvelope};
use crate::server::AppState;

/// Fabricated total-result count range (inclusive).
const TOTAL_RESULTS_RANGE: std::ops::RangeInclusive<u64> = 25_000..=150_000;

/// Request parameters after coercion.
#[derive(Debug)]
struct SearchParams {
    query: String,
    num_results: usize,
    safe: String,
    advanced: bool,
}

/// `POST /apis/search` - the gateway's single operation.
///
/// The body is parsed by hand from raw bytes so that authorization always
/// runs first: a bad key gets 401 even when the body is not valid JSON.
pub async fn api_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !authorized(&headers, &state.api_key) {
        return error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let body: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body"),
    };

    let params = match coerce_params(&body) {
        Ok(params) => params,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    let options = SearchOptions {
        num_results: params.num_results,
        safe: params.safe.clone(),
        advanced: params.advanced,
    };

    let started = Instant::now();
    let hits = match state.search.search(&params.query, &options).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::error!(query = %params.query, error = %e, "search failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    if !params.advanced {
        let results: Vec<BasicResult> = hits.iter().map(BasicResult::from_hit).collect();
        return (StatusCode::OK, Json(json!({ "results": results }))).into_response();
    }

    let items: Vec<ResultItem> = hits.iter().filter_map(ResultItem::from_hit).collect();
    let search_time = started.elapsed().as_secs_f64();
    let total_results = rand::rng().random_range(TOTAL_RESULTS_RANGE);

    let envelope = SearchEnvelope::build(
        &params.query,
        &params.safe,
        params.num_results,
        items,
        search_time,
        total_results,
    );

    (StatusCode::OK, Json(envelope)).into_response()
}

/// Validates and coerces the request body, rejecting on the first invalid
/// parameter. Returns the client-facing error message on failure.
fn coerce_params(body: &Value) -> Result<SearchParams, &'static str> {
    let query = body
        .get("query")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or("Missing 'query' parameter")?
        .to_string();

    let num_results = match body.get("num_results") {
        None | Some(Value::Null) => 10,
        Some(value) => coerce_integer(value).ok_or("'num_results' must be an integer")?,
    };

    // `unique` is accepted for wire compatibility but deliberately never
    // applied; the upstream contract ships it as an unused knob.
    let _unique = body.get("unique").and_then(Value::as_bool).unwrap_or(false);

    let safe = body
        .get("safe")
        .and_then(Value::as_str)
        .unwrap_or("off")
        .to_string();

    let advanced = body
        .get("advanced")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(SearchParams {
        query,
        num_results,
        safe,
        advanced,
    })
}

/// Accepts JSON integers and integer-valued strings; everything else is
/// malformed. Negative values clamp to zero.
fn coerce_integer(value: &Value) -> Option<usize> {
    let n = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    Some(usize::try_from(n).unwrap_or(0))
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
