use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use velora_core::error::ServiceError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ServiceError`] for data-service failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified error from the data service or the engine.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Hop 2 of the revalidation protocol failed; `details` carries the
    /// downstream status and body for operators.
    #[error("Revalidation failed: {details}")]
    Revalidation { details: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Service(ServiceError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The revalidation variant keeps the protocol's `{ error, details }`
        // shape instead of the standard `{ error, code }` envelope.
        if let AppError::Revalidation { details } = &self {
            tracing::error!(details = %details, "Revalidation trigger failed");
            let body = json!({
                "error": "Failed to revalidate public page",
                "details": details,
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
        }

        let (status, code, message) = match &self {
            AppError::Service(service) => match service {
                ServiceError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                ServiceError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                ServiceError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                ServiceError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                ServiceError::Network(msg) => {
                    tracing::error!(error = %msg, "Data service unreachable");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_UNAVAILABLE",
                        "The data service is currently unreachable".to_string(),
                    )
                }
                ServiceError::Config(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        "Service is misconfigured".to_string(),
                    )
                }
                ServiceError::Unknown(msg) => {
                    tracing::error!(error = %msg, "Unexpected data service error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Revalidation { .. } => unreachable!("handled above"),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
