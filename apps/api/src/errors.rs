use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::critique::extract::{ExtractError, EMPTY_CONTENT_MESSAGE};
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", EMPTY_CONTENT_MESSAGE)]
    EmptyContent,

    #[error("{0}")]
    Extraction(#[from] ExtractError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    /// Text for the page's error banner.
    pub fn banner_message(&self) -> String {
        match self {
            AppError::EmptyContent => EMPTY_CONTENT_MESSAGE.to_string(),
            AppError::Validation(msg) => msg.clone(),
            other => format!("An error occurred: {other}"),
        }
    }

    /// Logs server-side failures once, where they are turned into a response.
    pub fn log(&self) {
        match self {
            AppError::Validation(_) | AppError::EmptyContent => {}
            AppError::Extraction(e) => tracing::error!("Extraction error: {e}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::EmptyContent => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CONTENT"),
            AppError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_ERROR"),
            AppError::Llm(_) => (StatusCode::BAD_GATEWAY, "LLM_ERROR"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.banner_message()
            }
        }));

        (status, body).into_response()
    }
}
