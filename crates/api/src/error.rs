use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noteful_core::error::CoreError;
use serde_json::json;

/// Message returned for every 5xx response.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error": { "message": ... } }`
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `noteful_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the notes store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON for the expected shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::MissingField(_) | CoreError::EmptyUpdate => {
                    (StatusCode::BAD_REQUEST, core.to_string())
                }
            },

            // --- Store errors are never inspected beyond logging ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };

        let body = json!({
            "error": { "message": message },
        });

        (status, axum::Json(body)).into_response()
    }
}
