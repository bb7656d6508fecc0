use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noteful_core::error::{CoreError, ValidationError};
use serde_json::json;

/// Message sent to clients for any 500; the real cause is only logged.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as `{"error": {"message": "..."}}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `noteful_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure from the record store. Never retried or translated.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be read, e.g. malformed JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An unexpected failure inside the service, such as a handler panic.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { resource, .. } => (
                    StatusCode::NOT_FOUND,
                    resource.not_found_message().to_string(),
                ),
                CoreError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let body = json!({
            "error": { "message": message },
        });

        (status, axum::Json(body)).into_response()
    }
}
