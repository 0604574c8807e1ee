//! Configuration module
//!
//! - `auth` - Token signing and password hashing configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Configuration with the given signing secret and otherwise default values
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            auth: AuthConfig {
                jwt: JwtConfig::new(secret),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
