//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
///
/// Every handler translates its failures into one of these kinds; the
/// kind is decided where the failure is raised, never inferred from
/// message text downstream. Internal failures are logged at the raise
/// site with operation context and carry only a generic message to the
/// caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No session, unknown session token, or expired session
    #[error("Unauthorized")]
    Unauthorized,

    /// Caller-supplied data failed a business rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unique-constraint violation on a caller-supplied value
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource does not exist (also covers the dev-only bootstrap
    /// outside development)
    #[error("Not found")]
    NotFound,

    /// Unexpected repository or storage failure; the original error is
    /// logged server-side and never leaks into the response body
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    #[test]
    fn maps_kinds_to_statuses() {
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Validation("Name is required".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("Already exists".to_string())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("Could not save the record".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn unauthorized_body_carries_fixed_message() {
        let response = ApiError::Unauthorized.into_response();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        let payload: Value = serde_json::from_slice(&body).expect("expected json body");

        assert_eq!(payload["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn validation_body_carries_reason() {
        let response = ApiError::Validation("Title is required".to_string()).into_response();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        let payload: Value = serde_json::from_slice(&body).expect("expected json body");

        assert_eq!(payload["message"], "Title is required");
    }
}
