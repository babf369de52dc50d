use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The upstream extraction returned something that is not a job description.
    #[error("Failed to parse job description: {0}")]
    JobDescriptionParse(String),

    /// Scoring rules could not be loaded or are structurally invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Portfolio data error: {0}")]
    PortfolioData(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::JobDescriptionParse(msg) => {
                tracing::warn!("Job description parse failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "JOB_DESCRIPTION_PARSE_ERROR",
                    "Failed to parse job description".to_string(),
                )
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "Scoring configuration is unavailable".to_string(),
                )
            }
            AppError::PortfolioData(msg) => {
                tracing::error!("Portfolio data error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PORTFOLIO_DATA_ERROR",
                    "Portfolio data is unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
