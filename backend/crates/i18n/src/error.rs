//! I18n Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type I18nResult<T> = Result<T, I18nError>;

#[derive(Debug, Error)]
pub enum I18nError {
    /// Locale configuration failed startup validation
    #[error("Invalid locale configuration: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl I18nError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Config errors are startup-fatal; they never reach a response in
            // practice, but map them anyway
            I18nError::Config(_) | I18nError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for I18nError {
    fn into_response(self) -> Response {
        match &self {
            I18nError::Database(e) => tracing::error!(error = %e, "Translation lookup failed"),
            I18nError::Config(msg) => tracing::error!(message = %msg, "Locale config error"),
        }
        // Empty body; details stay in the logs
        (self.status_code(), ()).into_response()
    }
}
