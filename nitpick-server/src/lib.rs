//! Nitpick Server - HTTP API for the nitpick code review service
//!
//! Exposes the review endpoint over HTTP. The server holds no review state
//! of its own; history stays with the client that requested the review.

pub mod api;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/review", post(api::review::create_review))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the review API until the process exits
pub async fn serve(addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Review API listening");
    axum::serve(listener, create_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use nitpick_core::{CompletionClient, Result as CoreResult};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Records prompts and returns a canned review
    struct StubClient {
        prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    impl StubClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn recorded(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn complete(&self, prompt: &str) -> CoreResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(nitpick_core::Error::Completion("boom".to_string()));
            }
            Ok("Generated review.".to_string())
        }
    }

    fn app(client: Arc<StubClient>) -> Router {
        create_router(Arc::new(AppState::new(client)))
    }

    fn review_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/review")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StubClient::new())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_review_success_echoes_request_fields() {
        let client = StubClient::new();
        let response = app(client.clone())
            .oneshot(review_request(json!({
                "code": "fn main() {}",
                "language": "rust",
                "reviewType": "security"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["review"], "Generated review.");
        assert_eq!(body["language"], "rust");
        assert_eq!(body["reviewType"], "security");
        assert!(body["timestamp"].is_string());

        let prompts = client.recorded();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("security vulnerabilities"));
    }

    #[tokio::test]
    async fn test_review_type_defaults_to_comprehensive() {
        let client = StubClient::new();
        let response = app(client.clone())
            .oneshot(review_request(json!({
                "code": "print(1)",
                "language": "python"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["reviewType"], "comprehensive");
        assert!(client.recorded()[0].contains("comprehensive review"));
    }

    #[tokio::test]
    async fn test_unrecognized_review_type_defaults_to_comprehensive() {
        let client = StubClient::new();
        let response = app(client.clone())
            .oneshot(review_request(json!({
                "code": "print(1)",
                "language": "python",
                "reviewType": "sarcastic"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["reviewType"], "comprehensive");
    }

    #[tokio::test]
    async fn test_missing_code_is_bad_request() {
        let client = StubClient::new();
        let response = app(client.clone())
            .oneshot(review_request(json!({ "language": "rust" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Code and language are required"
        );
        assert!(client.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_empty_language_is_bad_request() {
        let client = StubClient::new();
        let response = app(client.clone())
            .oneshot(review_request(json!({
                "code": "fn main() {}",
                "language": ""
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(client.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_generic_500() {
        let client = StubClient::failing();
        let response = app(client)
            .oneshot(review_request(json!({
                "code": "fn main() {}",
                "language": "rust"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Failed to generate code review"
        );
    }
}
