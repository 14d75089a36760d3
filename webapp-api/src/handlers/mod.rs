//! HTTP handlers for webapp-api.

pub mod echo;
pub mod fallback;
pub mod health;
pub mod info;
pub mod metrics;

pub use echo::echo;
pub use fallback::not_found;
pub use health::{health_check, readiness_check};
pub use info::{config_info, info, root, status};
pub use self::metrics::{metrics, prometheus_metrics};

pub const SERVICE_NAME: &str = "terraform-webapp-api";
pub const APP_NAME: &str = "terraform-webapp";
pub const APP_VERSION: &str = "1.0.0";

/// Endpoints advertised by `/config`.
pub const API_ENDPOINTS: [&str; 6] = ["/", "/health", "/info", "/status", "/config", "/metrics"];

/// Endpoints advertised in 404 bodies.
pub const AVAILABLE_ENDPOINTS: [&str; 7] = [
    "/", "/health", "/info", "/status", "/config", "/metrics", "/echo",
];
