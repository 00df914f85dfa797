use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::layout::LayoutError;
use crate::llm_client::LlmError;
use crate::puzzle::validation::InvalidPuzzle;

/// Message shown to players for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Puzzle generation failed, please try again";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is scoped to the in-flight request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Upstream failure: {0}")]
    Upstream(#[from] LlmError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidPuzzle(_) => "INVALID_PUZZLE",
            AppError::Layout(_) => "LAYOUT_ERROR",
            AppError::Upstream(_) => "UPSTREAM_FAILURE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidPuzzle(e) => {
                tracing::warn!("Rejected generated puzzle: {}", e.reason);
                (StatusCode::BAD_GATEWAY, GENERATION_FAILED_MESSAGE.to_string())
            }
            AppError::Layout(e) => {
                tracing::error!("Layout error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Generative service error: {e}");
                (StatusCode::BAD_GATEWAY, GENERATION_FAILED_MESSAGE.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failures_hide_details() {
        let err = AppError::from(LayoutError::EmptyKeyword);
        assert_eq!(err.code(), "LAYOUT_ERROR");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_maps_to_bad_gateway() {
        let err = AppError::from(LlmError::EmptyContent);
        assert_eq!(err.code(), "UPSTREAM_FAILURE");
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
