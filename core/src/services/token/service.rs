//! Main token service implementation

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::token::{Claims, Payload, EXPIRY_CLAIM, ISSUED_AT_CLAIM};
use crate::domain::value_objects::TokenLifetime;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies HS256 tokens with the process-wide secret
///
/// Holds only immutable configuration, so one instance can be shared by every
/// request handler.
#[derive(Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a validation error if the secret is empty
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        if config.secret.is_empty() {
            return Err(DomainError::Validation {
                message: String::from("A non-empty signing secret is required"),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // `exp` is optional so eternal tokens verify; when present it is enforced.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Listening port used by link building
    pub fn port(&self) -> u16 {
        self.config.port
    }

    /// Signs `payload` with the default lifetime
    pub fn issue(&self, payload: &Payload) -> DomainResult<String> {
        self.issue_with_lifetime(payload, self.config.default_lifetime)
    }

    /// Signs `payload`, expiring `lifetime` after its issue time
    ///
    /// The issue time is a numeric `iat` carried by the payload, or now.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError::Validation)` - The payload already carries an `exp`
    ///   property, its `iat` is not a whole number, or the expiry overflows
    pub fn issue_with_lifetime(
        &self,
        payload: &Payload,
        lifetime: TokenLifetime,
    ) -> DomainResult<String> {
        if payload.contains_key(EXPIRY_CLAIM) {
            return Err(DomainError::Validation {
                message: String::from(
                    "Bad lifetime option: the payload already has an exp property",
                ),
            });
        }

        let iat = issued_at(payload)?;
        let exp = iat
            .checked_add(lifetime.as_seconds())
            .ok_or_else(|| DomainError::Validation {
                message: format!("Token lifetime {} overflows the expiry timestamp", lifetime),
            })?;

        let claims = Claims::new(without_registered_claims(payload), iat, Some(exp));
        self.encode_jwt(&claims)
    }

    /// Signs `payload` without an expiry
    ///
    /// Such tokens stay valid for as long as the secret does; reserve them for
    /// identities that must not expire. A numeric `exp` already present in the
    /// payload is kept as given.
    pub fn issue_eternal(&self, payload: &Payload) -> DomainResult<String> {
        let exp = match payload.get(EXPIRY_CLAIM) {
            None => None,
            Some(Value::Number(exp)) => Some(exp.as_i64().ok_or_else(invalid_exp)?),
            Some(_) => return Err(invalid_exp()),
        };

        let claims = Claims::new(without_registered_claims(payload), issued_at(payload)?, exp);
        self.encode_jwt(&claims)
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the signature and expiry check out
    /// * `Err(TokenError::InvalidToken)` - Token is tampered, malformed, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| {
                debug!(reason = ?error.kind(), "token verification failed");
                TokenError::InvalidToken
            })
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|error| {
            DomainError::Internal {
                message: format!("Token signing failed: {}", error),
            }
        })
    }
}

fn without_registered_claims(payload: &Payload) -> Payload {
    let mut payload = payload.clone();
    payload.remove(EXPIRY_CLAIM);
    payload.remove(ISSUED_AT_CLAIM);
    payload
}

/// Issue timestamp: the payload's own `iat` when present, otherwise now
fn issued_at(payload: &Payload) -> DomainResult<i64> {
    match payload.get(ISSUED_AT_CLAIM) {
        None => Ok(Utc::now().timestamp()),
        Some(iat) => iat.as_i64().ok_or_else(|| DomainError::Validation {
            message: String::from("The iat property must be a whole number of seconds"),
        }),
    }
}

fn invalid_exp() -> DomainError {
    DomainError::Validation {
        message: String::from("The exp property must be a whole number of seconds"),
    }
}
