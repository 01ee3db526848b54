//! Liveness and readiness endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body of `GET /ready`.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub uptime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Always answers `{"status":"ok"}` while the process is up.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Reports whether the backend API is reachable.
///
/// # Endpoint
///
/// `GET /ready`
///
/// # Response Codes
///
/// - **200 OK**: backend `/health` answered with success
/// - **503 Service Unavailable**: backend unreachable or unhealthy
///
/// # Response
///
/// ```json
/// { "status": "ready", "uptime": "12.34 seconds" }
/// ```
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, (StatusCode, Json<ReadyResponse>)> {
    let uptime = format!("{:.2} seconds", state.started_at.elapsed().as_secs_f64());

    match state.backend.health().await {
        Ok(()) => Ok(Json(ReadyResponse {
            status: "ready",
            uptime,
            message: None,
        })),
        Err(e) => {
            tracing::warn!("Backend not ready: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "initializing",
                    uptime,
                    message: Some("Backend is not reachable yet. Please try again later.".to_string()),
                }),
            ))
        }
    }
}
