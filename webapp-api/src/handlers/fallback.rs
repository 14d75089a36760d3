use axum::http::{Method, Uri};
use service_core::error::AppError;

use super::AVAILABLE_ENDPOINTS;

/// Catch-all for unknown paths and for known paths hit with the wrong
/// method.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, %uri, "No route matched");

    AppError::NotFound {
        available_endpoints: AVAILABLE_ENDPOINTS.to_vec(),
    }
}
