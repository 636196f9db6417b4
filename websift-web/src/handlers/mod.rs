//! HTTP handlers for the gateway API.

mod api;

pub use api::api_search;
