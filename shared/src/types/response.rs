//! Uniform response envelope
//!
//! Every response body is exactly one of
//! `{"status": "success", "data": ...}` or
//! `{"status": "fail", "error": {"message": ..., "errors": ...}}`,
//! paired with the HTTP status code the caller should apply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message used when a failure is reported without one
pub const DEFAULT_FAILURE_MESSAGE: &str = "Some error occurred while processing your Request";

/// Response body shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success { data: T },
    Fail { error: FailureBody },
}

/// Error section of a failure envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    /// Human-readable error message
    pub message: String,

    /// A single structured error or a collection of them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

/// Envelope plus the status code it is sent with
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub code: u16,
    pub body: Envelope<T>,
}

impl<T> Reply<T> {
    /// Success envelope sent with 200
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            body: Envelope::Success { data },
        }
    }

    /// Override the status code
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    /// Check if the envelope is a success
    pub fn is_success(&self) -> bool {
        matches!(self.body, Envelope::Success { .. })
    }
}

/// Builder for failure envelopes
///
/// Defaults to status 500 with [`DEFAULT_FAILURE_MESSAGE`] and no `errors`.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub code: u16,
    pub message: String,
    pub errors: Option<Value>,
}

impl Default for Failure {
    fn default() -> Self {
        Self {
            code: 500,
            message: String::from(DEFAULT_FAILURE_MESSAGE),
            errors: None,
        }
    }
}

impl Failure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn errors(mut self, errors: impl Into<Value>) -> Self {
        self.errors = Some(errors.into());
        self
    }

    /// The error section of the envelope
    pub fn body(&self) -> FailureBody {
        FailureBody {
            message: self.message.clone(),
            errors: self.errors.clone(),
        }
    }

    /// Convert into a reply; the data type is free since no data is carried
    pub fn into_reply<T>(self) -> Reply<T> {
        Reply {
            code: self.code,
            body: Envelope::Fail {
                error: FailureBody {
                    message: self.message,
                    errors: self.errors,
                },
            },
        }
    }
}
