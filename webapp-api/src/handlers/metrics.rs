use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use service_core::observability::render_metrics;

use crate::startup::AppState;
use crate::state::now_timestamp;

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub requests_total: u64,
    pub service_uptime_seconds: f64,
    pub environment: String,
    pub container: String,
    pub timestamp: String,
}

/// JSON counters. Reading them is not itself counted.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        requests_total: state.service.requests_count(),
        service_uptime_seconds: state.service.uptime_seconds(),
        environment: state.service.environment().to_string(),
        container: state.service.container_name().to_string(),
        timestamp: now_timestamp(),
    })
}

/// Per-route HTTP metrics in the Prometheus text format.
pub async fn prometheus_metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        render_metrics(),
    )
}
