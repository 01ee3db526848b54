//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Dashboard (guest view without a session)
//! - `POST /query`   - Query submission
//! - `GET  /login`   - Login page, `POST` submits credentials
//! - `POST /logout`  - End the session
//! - `GET  /health`  - Liveness (always ok)
//! - `GET  /ready`   - Readiness, probes the backend
//! - `/static/*`     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::{health_handler, ready_handler};
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes and tracing, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
