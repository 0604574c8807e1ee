//! Configuration for the token service

use std::fmt;

use tb_shared::AppConfig;

use crate::domain::value_objects::TokenLifetime;
use crate::errors::{DomainError, DomainResult};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign and verify tokens
    pub secret: String,
    /// Lifetime of tokens issued without an explicit one
    pub default_lifetime: TokenLifetime,
    /// Port appended to links built for `localhost`
    pub port: u16,
}

impl TokenServiceConfig {
    /// Creates a configuration with a one day default lifetime on port 8080
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            default_lifetime: TokenLifetime::default(),
            port: 8080,
        }
    }

    pub fn with_default_lifetime(mut self, lifetime: TokenLifetime) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builds the token configuration out of the application configuration
    ///
    /// Fails when the secret is missing or the default lifetime does not parse.
    pub fn from_app_config(config: &AppConfig) -> DomainResult<Self> {
        let jwt = &config.auth.jwt;
        if !jwt.has_secret() {
            return Err(DomainError::Validation {
                message: String::from("A non-empty signing secret is required"),
            });
        }

        Ok(Self {
            secret: jwt.secret.clone(),
            default_lifetime: jwt.default_expiry.parse()?,
            port: config.server.port,
        })
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("default_lifetime", &self.default_lifetime)
            .field("port", &self.port)
            .finish()
    }
}
