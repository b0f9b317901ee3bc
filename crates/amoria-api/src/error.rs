//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use amoria_core::error::{AppError, ErrorKind};

/// Result alias for handler return types.
///
/// `?` on any `AppResult` converts through [`ApiError`] into an HTTP
/// response.
pub type ApiResult<T> = Result<T, ApiError>;

/// Newtype giving [`AppError`] an HTTP rendering.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Error payload.
    pub error: ApiErrorBody,
}

/// The error payload inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = status_for(error.kind);

        // Server-side failures keep their detail in the logs, not the body.
        let (code, message) = if status.is_server_error() {
            tracing::error!(kind = %error.kind, error = %error, "request failed");
            match error.kind {
                ErrorKind::Upstream => (
                    ErrorKind::Upstream.to_string(),
                    "Upstream request failed".to_string(),
                ),
                _ => (
                    ErrorKind::Internal.to_string(),
                    "An internal error occurred".to_string(),
                ),
            }
        } else {
            (error.kind.to_string(), error.message)
        };

        let body = ApiErrorResponse {
            success: false,
            error: ApiErrorBody { code, message },
        };
        (status, Json(body)).into_response()
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Upstream => StatusCode::BAD_GATEWAY,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::Upstream), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(ErrorKind::Database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let response = ApiError(AppError::forbidden("Administrator access required"));
        let rendered = response.into_response();
        assert_eq!(rendered.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_server_errors_use_a_generic_body() {
        let error = AppError::database("connection pool exhausted on shard 3");
        let body_matches = {
            let status = status_for(error.kind);
            status.is_server_error()
        };
        assert!(body_matches);
    }
}
