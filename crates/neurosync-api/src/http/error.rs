//! Application error type mapping to HTTP status codes and the error envelope.
//!
//! Every failure leaves the server as:
//!
//! ```json
//! { "error": { "code": "BAD_REQUEST", "message": "...", "details": { ... } } }
//! ```
//!
//! `details` appears only for provider errors and never contains the
//! credential (the relay has already redacted it). Extractor rejections are
//! folded into the same envelope as `BAD_REQUEST`.

use axum::extract::rejection::{BytesRejection, JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use neurosync_types::error::RelayError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Relay failures, one per contract error kind.
    Relay(RelayError),
    /// Request could not be read or parsed before reaching a handler.
    BadRequest(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Status, machine-readable code, caller-facing message and optional details.
    fn parts(&self) -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
        match self {
            AppError::Relay(RelayError::MethodNotAllowed) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed".to_string(),
                None,
            ),
            AppError::Relay(RelayError::BadRequest(msg)) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::Relay(RelayError::MissingCredential(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_NOT_CONFIGURED",
                "The assistant is not configured on this server.".to_string(),
                None,
            ),
            AppError::Relay(RelayError::Provider { status, body }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_ERROR",
                format!("Provider request failed with status {status}."),
                Some(json!({ "status": status, "body": body })),
            ),
            AppError::Relay(RelayError::Transport(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_UNREACHABLE",
                "Internal server error while contacting the provider.".to_string(),
                None,
            ),
            AppError::Relay(RelayError::Timeout) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_TIMEOUT",
                "The provider did not respond in time.".to_string(),
                None,
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
