#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("{step} step failed: {source}")]
    Provider {
        step: &'static str,
        #[source]
        source: LlmError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, step) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::EmptyInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_INPUT",
                msg.clone(),
                None,
            ),
            AppError::Provider { step, source } => {
                tracing::error!("Completion provider error during {step} step: {source}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    format!("The {step} step failed at the completion provider"),
                    Some(*step),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(step) = step {
            error["step"] = json!(step);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
