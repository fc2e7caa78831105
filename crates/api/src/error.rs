use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scene_editor_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scene_editor_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and stable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::NotReady(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_READY")
            }
        }
    }

    /// The human-readable message without the error kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Core(CoreError::Validation(msg) | CoreError::NotReady(msg)) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if let AppError::Core(CoreError::NotReady(msg)) = &self {
            tracing::warn!(reason = %msg, "Editor mutation rejected");
        }

        let body = json!({
            "error": self.message(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
