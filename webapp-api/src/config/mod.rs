use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_ENVIRONMENT: &str = "docker";
pub const DEFAULT_CONTAINER_NAME: &str = "webapp-1";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_NODE_ENV: &str = "development";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup settings, captured once and never re-read.
#[derive(Debug, Clone)]
pub struct WebappConfig {
    pub common: core_config::Config,
    pub environment: String,
    pub container_name: String,
    pub timezone: String,
    pub node_env: String,
    pub log_level: String,
    /// When set, spans are also exported over OTLP.
    pub otlp_endpoint: Option<String>,
}

impl Default for WebappConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            node_env: DEFAULT_NODE_ENV.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }
}

impl WebappConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Ok(Self::from_env(common))
    }

    pub fn from_env(common: core_config::Config) -> Self {
        WebappConfig {
            common,
            environment: get_env("ENVIRONMENT", DEFAULT_ENVIRONMENT),
            container_name: get_env("CONTAINER_NAME", DEFAULT_CONTAINER_NAME),
            timezone: get_env("TIMEZONE", DEFAULT_TIMEZONE),
            node_env: get_env("NODE_ENV", DEFAULT_NODE_ENV),
            log_level: get_env("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
