//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Lifetime applied to tokens issued without an explicit expiry
pub const DEFAULT_TOKEN_LIFETIME: &str = "1d";

/// bcrypt work factor used for password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens; must be non-empty
    #[serde(default)]
    pub secret: String,

    /// Default token lifetime, either seconds or a span such as "1d" or "10h"
    #[serde(default = "default_token_lifetime")]
    pub default_expiry: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            default_expiry: default_token_lifetime(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the default token lifetime
    pub fn with_default_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.default_expiry = expiry.into();
        self
    }

    /// Whether a usable signing secret is present
    pub fn has_secret(&self) -> bool {
        !self.secret.trim().is_empty()
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    #[serde(default = "default_bcrypt_cost")]
    pub cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            cost: default_bcrypt_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_token_lifetime() -> String {
    String::from(DEFAULT_TOKEN_LIFETIME)
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
