use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use super::{API_ENDPOINTS, APP_NAME, APP_VERSION, SERVICE_NAME};
use crate::startup::AppState;
use crate::state::{format_timestamp, now_timestamp};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub uptime_start: String,
    pub requests_processed: u64,
    pub current_time: String,
    pub container: String,
    pub environment: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub app_name: &'static str,
    pub app_version: &'static str,
    pub environment: String,
    pub container: String,
    pub runtime_version: &'static str,
    pub platform_version: String,
    pub api_endpoints: [&'static str; 6],
}

/// Stands in for the web framework version of the original deployment.
const RUNTIME_VERSION: &str = concat!("webapp-api/", env!("CARGO_PKG_VERSION"), " (axum)");

fn platform_version() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    state.service.record_request();

    Json(json!({
        "status": "ok",
        "message": "Backend API Running",
        "service": SERVICE_NAME,
        "environment": state.service.environment(),
        "container": state.service.container_name(),
        "timestamp": now_timestamp()
    }))
}

pub async fn info(State(state): State<AppState>) -> Json<Value> {
    state.service.record_request();

    Json(json!({
        "app": "terraform-webapp-backend",
        "version": APP_VERSION,
        "environment": state.service.environment(),
        "timezone": state.config.timezone,
        "node_env": state.config.node_env,
        "log_level": state.config.log_level,
        "timestamp": now_timestamp()
    }))
}

#[tracing::instrument(skip_all)]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let requests_processed = state.service.record_request();

    Json(StatusResponse {
        status: "running",
        service: SERVICE_NAME,
        uptime_start: format_timestamp(state.service.start_time()),
        requests_processed,
        current_time: now_timestamp(),
        container: state.service.container_name().to_string(),
        environment: state.service.environment().to_string(),
    })
}

pub async fn config_info(State(state): State<AppState>) -> Json<ConfigResponse> {
    state.service.record_request();

    Json(ConfigResponse {
        app_name: APP_NAME,
        app_version: APP_VERSION,
        environment: state.service.environment().to_string(),
        container: state.service.container_name().to_string(),
        runtime_version: RUNTIME_VERSION,
        platform_version: platform_version(),
        api_endpoints: API_ENDPOINTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version_mentions_crate_version() {
        assert!(RUNTIME_VERSION.starts_with("webapp-api/"));
        assert!(RUNTIME_VERSION.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_platform_version_is_os_and_arch() {
        let platform = platform_version();
        assert!(platform.starts_with(std::env::consts::OS));
        assert!(platform.ends_with(std::env::consts::ARCH));
    }
}
