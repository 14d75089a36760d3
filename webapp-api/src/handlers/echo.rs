use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::startup::AppState;
use crate::state::now_timestamp;

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub received: Value,
    pub timestamp: String,
    pub message: &'static str,
}

/// Echo the request body back.
///
/// Only bodies sent with a JSON content type are parsed; anything else,
/// including malformed JSON, is echoed as `{}`.
pub async fn echo(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<EchoResponse> {
    state.service.record_request();

    Json(EchoResponse {
        received: received_payload(&headers, &body),
        timestamp: now_timestamp(),
        message: "Data echoed back",
    })
}

fn received_payload(headers: &HeaderMap, body: &[u8]) -> Value {
    if !is_json_content_type(headers) {
        return Value::Object(Map::new());
    }

    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Ignoring unparseable echo body: {}", e);
            Value::Object(Map::new())
        }
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
