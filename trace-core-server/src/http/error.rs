use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use trace_core_api::TraceError;
use tracing::error;

/// Stable error codes returned in the `code` field of every error body.
pub mod error_codes {
    // 404
    pub const NOT_FOUND: &str = "not_found";

    // 400
    pub const DUPLICATE_IDENTIFIER: &str = "duplicate_identifier";
    pub const VALIDATION_ERROR: &str = "validation_error";

    // 401 / 403
    pub const UNAUTHENTICATED: &str = "unauthenticated";
    pub const FORBIDDEN: &str = "forbidden";

    // 413
    pub const PAYLOAD_TOO_LARGE: &str = "payload_too_large";

    // 500
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// JSON error body: `{"code": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::VALIDATION_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            error_codes::NOT_FOUND => StatusCode::NOT_FOUND,
            error_codes::DUPLICATE_IDENTIFIER | error_codes::VALIDATION_ERROR => {
                StatusCode::BAD_REQUEST
            }
            error_codes::UNAUTHENTICATED => StatusCode::UNAUTHORIZED,
            error_codes::FORBIDDEN => StatusCode::FORBIDDEN,
            error_codes::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TraceError> for ApiError {
    fn from(err: TraceError) -> Self {
        match err {
            TraceError::NotFound(msg) => Self::new(error_codes::NOT_FOUND, msg),
            TraceError::DuplicateIdentifier(msg) => {
                Self::new(error_codes::DUPLICATE_IDENTIFIER, msg)
            }
            TraceError::Validation(msg) => Self::validation_error(msg),
            TraceError::Unauthenticated(msg) => Self::new(error_codes::UNAUTHENTICATED, msg),
            TraceError::Forbidden(msg) => Self::new(error_codes::FORBIDDEN, msg),
            TraceError::Database(msg) | TraceError::Internal(msg) => {
                // Storage details stay in the log.
                error!(error = %msg, "Request failed");
                Self::new(error_codes::INTERNAL_ERROR, "internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_errors_map_to_statuses() {
        let cases = [
            (TraceError::batch_not_found("B1"), StatusCode::NOT_FOUND),
            (TraceError::batch_id_taken("B1"), StatusCode::BAD_REQUEST),
            (TraceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (TraceError::Unauthenticated("no".into()), StatusCode::UNAUTHORIZED),
            (TraceError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (TraceError::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (TraceError::Internal("oops".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_message_carries_inner_text() {
        let api = ApiError::from(TraceError::batch_id_taken("B1"));
        assert_eq!(api.code, error_codes::DUPLICATE_IDENTIFIER);
        assert_eq!(api.message, "batch_id 'B1' already exists");
    }

    #[test]
    fn test_database_details_are_hidden() {
        let api = ApiError::from(TraceError::Database("connection refused on 10.0.0.5".into()));
        assert_eq!(api.code, error_codes::INTERNAL_ERROR);
        assert!(!api.message.contains("10.0.0.5"));
    }
}
