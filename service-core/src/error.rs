use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// No route matched the request path and method.
    #[error("Not found")]
    NotFound { available_endpoints: Vec<&'static str> },

    #[error("{0:#}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_endpoints: Option<Vec<&'static str>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound {
                available_endpoints,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found",
                    message: "The requested endpoint does not exist".to_string(),
                    available_endpoints: Some(available_endpoints),
                },
            ),
            // The fault text is returned to the caller as-is.
            AppError::InternalError(err) => {
                tracing::error!(error = %format!("{:#}", err), "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error",
                        message: format!("{:#}", err),
                        available_endpoints: None,
                    },
                )
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error",
                        message: format!("Configuration error: {}", err),
                        available_endpoints: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_lists_endpoints() {
        let response = AppError::NotFound {
            available_endpoints: vec!["/", "/health"],
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "The requested endpoint does not exist");
        assert_eq!(body["available_endpoints"], serde_json::json!(["/", "/health"]));
    }

    #[tokio::test]
    async fn test_internal_error_exposes_fault_message() {
        let err: anyhow::Result<()> = Err(anyhow::anyhow!("disk on fire")).context("reading state");
        let response = AppError::from(err.unwrap_err()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "reading state: disk on fire");
        assert!(body.get("available_endpoints").is_none());
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let err = AppError::from(std::io::Error::other("address in use"));
        assert!(matches!(err, AppError::InternalError(_)));
        assert_eq!(err.to_string(), "address in use");
    }
}
