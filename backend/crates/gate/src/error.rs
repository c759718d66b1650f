//! Gate Error Types
//!
//! One variant per rejection in the verification pipeline. Anti-automation
//! rejections share the 403 status so the HTTP layer does not signal which
//! check failed; the JSON `err` code carries the distinction.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// Request method is not POST
    #[error("Verification requires POST")]
    Method,

    /// Body did not parse as the expected JSON object
    #[error("Malformed verification payload")]
    Payload,

    /// Submitted nonce does not match the session's nonce
    #[error("Nonce mismatch")]
    Nonce,

    /// Submitted PoW does not match the session's expectation (or none exists)
    #[error("Proof-of-work mismatch")]
    Pow,

    /// Client timestamp is older than the freshness window
    #[error("Stale submission timestamp")]
    Stale,

    /// User-Agent or client metadata matches an automation signature
    #[error("Automation signature detected")]
    Automation,
}

impl GateError {
    /// Machine-readable error code reported in the JSON body
    pub fn code(&self) -> &'static str {
        match self {
            GateError::Method => "method",
            GateError::Payload => "payload",
            GateError::Nonce => "nonce",
            GateError::Pow => "pow",
            GateError::Stale => "ts",
            GateError::Automation => "ua",
        }
    }

    /// HTTP status code for this rejection
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::Method => StatusCode::METHOD_NOT_ALLOWED,
            GateError::Payload => StatusCode::BAD_REQUEST,
            GateError::Nonce | GateError::Pow | GateError::Stale | GateError::Automation => {
                StatusCode::FORBIDDEN
            }
        }
    }

    fn log(&self) {
        match self {
            GateError::Automation => {
                tracing::warn!(code = self.code(), "Gate rejected automation signature");
            }
            _ => {
                tracing::debug!(code = self.code(), "Gate rejected submission");
            }
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({ "ok": false, "err": self.code() }));
        (self.status_code(), body).into_response()
    }
}
