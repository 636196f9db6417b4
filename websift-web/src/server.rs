//! Axum server wiring for the search gateway.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use websift_search::WebSearchService;

use crate::config::GatewayConfig;
use crate::handlers::api_search;
use crate::pages::landing_page;

/// Shared state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Search service behind the gateway.
    pub search: Arc<WebSearchService>,
    /// Shared secret clients must present.
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates state from a service and the configured secret.
    pub fn new(search: WebSearchService, api_key: &str) -> Self {
        Self {
            search: Arc::new(search),
            api_key: Arc::from(api_key),
        }
    }
}

/// Builds the gateway router. Split out from [`run_server`] so tests can
/// drive it directly without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/apis/search", post(api_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the gateway until the process is stopped.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(
    config: GatewayConfig,
    demo: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let search = if demo {
        WebSearchService::new_demo()
    } else {
        WebSearchService::new()
    };

    let state = AppState::new(search, &config.api_key);
    let app = router(state);

    tracing::info!(bind = %config.bind_address, demo, "search gateway listening");
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
