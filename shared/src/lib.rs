//! Shared configuration and response types for the Toolbox server
//!
//! This crate provides functionality used by both the core and api crates:
//! - Configuration types
//! - The uniform success/failure response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig, PasswordConfig, ServerConfig,
};
pub use types::{Envelope, Failure, FailureBody, Reply, DEFAULT_FAILURE_MESSAGE};
