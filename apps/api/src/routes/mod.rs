pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::puzzle::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-puzzle",
            get(handlers::handle_generate_puzzle),
        )
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::puzzle::generator::tests::{planet_payload, CannedSource};

    fn app(payload: Option<Value>) -> Router {
        let config = Config {
            gemini_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            default_theme: "Space science".to_string(),
            static_dir: "does-not-exist".to_string(),
        };
        build_router(AppState {
            config,
            source: Arc::new(CannedSource(payload)),
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_puzzle_route() {
        let (status, body) =
            get_json(app(Some(planet_payload())), "/api/generate-puzzle?theme=Space").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vertical_keyword"]["word"], "PLANET");
        assert_eq!(body["grid"]["rows"], 6);
        assert_eq!(body["horizontal_clues"][0]["clue_number"], 1);
    }

    #[tokio::test]
    async fn test_generate_puzzle_without_theme_uses_default() {
        let (status, _) = get_json(app(Some(planet_payload())), "/api/generate-puzzle").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_generic_error() {
        let (status, body) = get_json(app(None), "/api/generate-puzzle?theme=Space").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_FAILURE");
        assert_eq!(
            body["error"]["message"],
            crate::errors::GENERATION_FAILED_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_invalid_puzzle_returns_generic_error() {
        let mut payload = planet_payload();
        payload["vertical_keyword"]["word"] = Value::String(String::new());
        let (status, body) = get_json(app(Some(payload)), "/api/generate-puzzle").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "INVALID_PUZZLE");
    }

    #[tokio::test]
    async fn test_overlong_theme_rejected() {
        let uri = format!("/api/generate-puzzle?theme={}", "a".repeat(201));
        let (status, body) = get_json(app(Some(planet_payload())), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
