//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use autoclearskies_domain::error::{AutoClearSkiesError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`AutoClearSkiesError`] to an HTTP response with appropriate status code.
pub struct ApiError(AutoClearSkiesError);

impl From<AutoClearSkiesError> for ApiError {
    fn from(err: AutoClearSkiesError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ValidationError::PayloadTooLarge
        } else {
            ValidationError::MalformedPayload(rejection.body_text())
        };
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AutoClearSkiesError::Validation(err @ ValidationError::PayloadTooLarge) => {
                (StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            AutoClearSkiesError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AutoClearSkiesError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AutoClearSkiesError::Unavailable(err) => {
                tracing::warn!(error = %err, "dependency unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
