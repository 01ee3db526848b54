//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, the shared state, and runs the Axum server
//! until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::http::HttpBackend;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Backend API client
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// The backend is not contacted at startup; `/ready` reports reachability.
///
/// # Errors
///
/// Returns an error if:
/// - The backend URL or HTTP client is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let backend = HttpBackend::new(config.backend_base_url()?, config.backend_timeout())
        .context("Failed to create backend client")?;
    tracing::info!("Backend client targets {}", backend.base_url());

    let state = AppState::new(
        Arc::new(backend),
        config.render_mode,
        config.cookie_settings(),
    );

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
