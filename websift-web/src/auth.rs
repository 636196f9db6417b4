//! Shared-secret request authorization.

use axum::http::HeaderMap;

/// Name of the header carrying the client's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Checks the request's `x-api-key` header against the configured secret.
///
/// Absent, non-UTF-8, or mismatching keys all fail. The comparison is
/// constant-time so the check does not leak key prefixes through timing.
pub fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    constant_time_eq(presented.as_bytes(), expected.as_bytes())
}

/// Constant-time byte comparison (length mismatch short-circuits, which
/// only reveals the key length).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
