//! API error type rendered as a failure envelope

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::Value;
use tb_core::errors::{DomainError, TokenError};
use tb_shared::Failure;
use thiserror::Error;

use super::response::failure;

/// Error returned by handlers, extractors and middleware
///
/// Always rendered as `{"status": "fail", "error": {"message", "errors"}}`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub errors: Option<Value>,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: impl Into<Value>) -> Self {
        self.errors = Some(errors.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Authentication required")
    }

    pub fn not_found() -> Self {
        Self::new(404, "The requested resource was not found")
    }

    /// 500 carrying the generic failure message
    pub fn internal() -> Self {
        let default = Failure::new();
        Self::new(default.code, default.message)
    }

    pub fn to_failure(&self) -> Failure {
        let failure = Failure::new().code(self.code).message(self.message.clone());
        match &self.errors {
            Some(errors) => failure.errors(errors.clone()),
            None => failure,
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self::new(error.status_code(), error.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Token(token_error) => token_error.into(),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Internal { message } => {
                log::error!("Internal error: {}", message);
                Self::internal()
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        failure(self.to_failure())
    }
}
