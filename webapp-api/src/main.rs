use service_core::observability::init_tracing;
use webapp_api::config::WebappConfig;
use webapp_api::startup::{shutdown_signal, Application};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebappConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "webapp-api",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start webapp-api: {}", e))?;

    app.run_with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Shutdown complete");
    Ok(())
}
