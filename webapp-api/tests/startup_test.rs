mod common;

use common::test_config;
use service_core::error::AppError;
use webapp_api::startup::Application;

#[tokio::test]
async fn build_fails_when_port_is_taken() {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind test port");
    let port = occupied.local_addr().unwrap().port();

    let mut config = test_config();
    config.common.port = port;

    let result = Application::build(config).await;
    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[tokio::test]
async fn build_reports_ephemeral_port() {
    let app = Application::build(test_config())
        .await
        .expect("Failed to build test application");

    assert_ne!(app.port(), 0);
}
