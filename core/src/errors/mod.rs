//! Domain error types.

use thiserror::Error;

/// Client-facing message for every token verification failure
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid Token";

/// Token verification errors
///
/// Signature, format and expiry failures all collapse into `InvalidToken` so
/// clients see one message whatever the cryptographic cause.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid Token")]
    InvalidToken,
}

impl TokenError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> u16 {
        match self {
            TokenError::InvalidToken => 400,
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Validation { .. } => 400,
            DomainError::Internal { .. } => 500,
            DomainError::Token(e) => e.status_code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
