//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the full application: document endpoints under
//! `/api`, a liveness endpoint, and the tracing/CORS/timeout layers.

pub mod documents;

pub use documents::{document_routes, DocumentHandlers};

use axum::{http::HeaderValue, routing::get, Router};
use http::Method;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

pub fn build_router(handlers: DocumentHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(documents::health))
        .nest("/api", document_routes(handlers))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// No configured origins means no cross-origin access.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        layer
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
