use crate::error::AppError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::InternalError(anyhow::anyhow!(details)).into_response()
}
