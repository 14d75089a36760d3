use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;
use crate::state::now_timestamp;

/// Liveness check. Counts as a handled request.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    state.service.record_request();

    Json(json!({
        "status": "healthy",
        "timestamp": now_timestamp()
    }))
}

/// Readiness check for the orchestrator. Not counted.
pub async fn readiness_check() -> impl IntoResponse {
    Json(json!({ "ready": true }))
}
