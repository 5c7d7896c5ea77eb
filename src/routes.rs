//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`     - Short code redirect
//! - `GET  /health`     - Health check
//! - `/shorten[/{code}]` - Short code management (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Rate limiting** - Per-IP token bucket (optional, not applied to `/health`)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request
/// - `rate_limit` - per-IP limiter; requires serving with connect info
pub fn app_router(
    state: AppState,
    request_timeout: Duration,
    rate_limit: Option<RateLimitLayer>,
) -> NormalizePath<Router> {
    let mut limited = Router::new()
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::shorten_routes());

    if let Some(layer) = rate_limit {
        limited = limited.layer(layer);
    }

    let router = limited
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
