//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Turns gateway errors into uniform JSON error responses with a status code
//! matching the error kind.
//!
//! # Key invariants and assumptions
//! - Error responses include a stable `code` and a human-readable `message`.
//! - Internal errors log details server-side and return a generic message.
use crate::api::types::ErrorResponse;
use crate::error::{Error, ErrorKind};
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// # Invariants
/// - `status` must match the semantics of `body.code`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HTTP status for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::InvalidJsonBody => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Remote => StatusCode::BAD_GATEWAY,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Cancelled => StatusCode::REQUEST_TIMEOUT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let kind = err.kind();
        let message = if kind == ErrorKind::Internal {
            tracing::error!(error = %err, "schema gateway internal error");
            "internal error".to_string()
        } else {
            err.message().to_string()
        };
        ApiError {
            status: status_for(kind),
            body: ErrorResponse {
                code: kind.code().to_string(),
                message,
                request_id: None,
            },
        }
    }
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        body: ErrorResponse {
            code: ErrorKind::NotFound.code().to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}
