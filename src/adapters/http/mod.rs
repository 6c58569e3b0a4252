//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the full service: `/health`, the assessment
//! API under `/api`, and the tower-http layers configured by [`ServerConfig`].

pub mod assessment;

pub use assessment::{assessment_routes, AssessmentHandlers};

use std::time::Duration;

use axum::{routing::get, Router};
use http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Builds the application router.
pub fn app_router(handlers: AssessmentHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", assessment_routes(handlers))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness check
async fn health() -> &'static str {
    "ok"
}

/// Allows configured origins; any origin outside production when none are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if !origins.is_empty() {
        layer.allow_origin(origins)
    } else if server.is_production() {
        layer
    } else {
        layer.allow_origin(Any)
    }
}
