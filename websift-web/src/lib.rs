//! Websift Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! HTTP façade over the search providers: authenticates requests with a
//! shared-secret header, validates parameters, and reshapes provider hits
//! into a Custom Search-style JSON envelope.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use config::{ConfigError, GatewayConfig};
pub use server::{AppState, router, run_server};
