pub mod cors;
pub mod metrics;
pub mod panic;
pub mod tracing;

use axum::{Router, middleware::from_fn};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use cors::cors_headers_middleware;
pub use self::metrics::metrics_middleware;
pub use panic::handle_panic;
pub use self::tracing::{REQUEST_ID_HEADER, request_id_middleware};

/// Call after all routes and the fallback are registered.
pub fn apply_common_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(self::tracing::make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(cors_headers_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("counter overflowed")
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_500_with_cors() {
        let app = apply_common_layers(Router::new().route("/explode", get(explode)));

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            cors::ALLOW_ORIGIN
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "counter overflowed");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_back() {
        let app = apply_common_layers(Router::new().route("/", get(|| async { "ok" })));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
    }
}
