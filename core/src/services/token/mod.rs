//! Token service module
//!
//! This module handles all token-related operations:
//! - Signing expiring and eternal tokens
//! - Verifying tokens into their claims
//! - Building email verification and password reset links
//! - Resolving the candidate token carried by a request

mod config;
mod links;
mod request_parts;
mod resolver;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use links::{
    LinkContext, LOCAL_HOSTNAME, PASSWORD_RESET_LIFETIME, PASSWORD_RESET_PATH, VERIFICATION_PATH,
};
pub use request_parts::RequestParts;
pub use resolver::{
    authorization_credentials, resolve_token, resolve_token_with_source, TokenCarrier,
    TokenSource, TOKEN_FIELD,
};
pub use service::TokenService;
