//! Application startup and lifecycle management.
//!
//! Builds the router over the shared [`ServiceState`], binds the listener
//! and serves until a shutdown signal arrives.

use crate::config::WebappConfig;
use crate::handlers::{
    config_info, echo, health_check, info, metrics, not_found, prometheus_metrics,
    readiness_check, root, status,
};
use crate::state::ServiceState;
use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    routing::{get, post, MethodRouter},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::apply_common_layers;
use service_core::observability::init_metrics;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<WebappConfig>,
    pub service: Arc<ServiceState>,
}

impl AppState {
    pub fn new(config: WebappConfig) -> Self {
        let service =
            ServiceState::new(config.environment.clone(), config.container_name.clone());
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}

/// GET-only route; any other method gets the 404 body.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(not_found)
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get_only(root))
        .route("/health", get_only(health_check))
        .route("/info", get_only(info))
        .route("/status", get_only(status))
        .route("/config", get_only(config_info))
        .route("/metrics", get_only(metrics))
        .route("/metrics/prometheus", get_only(prometheus_metrics))
        // Echo takes bodies of any size.
        .route(
            "/echo",
            post(echo)
                .fallback(not_found)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/ready", get_only(readiness_check))
        .fallback(not_found)
        .with_state(state);

    apply_common_layers(router)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener and prepare shared state.
    ///
    /// Port `0` in the config binds a random free port.
    pub async fn build(config: WebappConfig) -> Result<Self, AppError> {
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let local_addr = listener.local_addr()?;

        init_metrics();

        tracing::info!(
            environment = %config.environment,
            container = %config.container_name,
            address = %local_addr,
            "webapp-api starting"
        );

        Ok(Self {
            port: local_addr.port(),
            listener,
            state: AppState::new(config),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_graceful_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then let in-flight requests finish.
    pub async fn run_with_graceful_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
