use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Editor status: `loading`, `failed` or `ready`.
    pub editor: &'static str,
}

/// GET /health -- returns service and editor health.
///
/// A failed reference fetch degrades the service; loading does not.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let editor = state.session.snapshot().await.status().name();

    let status = if editor == "failed" { "degraded" } else { "ok" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        editor,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
