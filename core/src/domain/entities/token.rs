//! Claims carried by signed tokens.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary identity data embedded in a token, e.g. `{"id": 1, "email": "..."}`
pub type Payload = Map<String, Value>;

/// Registered claim holding the expiry timestamp
pub const EXPIRY_CLAIM: &str = "exp";

/// Registered claim holding the issue timestamp
pub const ISSUED_AT_CLAIM: &str = "iat";

/// Claims structure for the JWT body
///
/// The identity payload is flattened next to the registered `iat`/`exp`
/// claims, so a token over `{"id": 1}` encodes as `{"id": 1, "iat": .., "exp": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity data
    #[serde(flatten)]
    pub payload: Payload,

    /// Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration timestamp, absent for eternal tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates claims over `payload`
    pub fn new(payload: Payload, iat: i64, exp: Option<i64>) -> Self {
        Self {
            payload,
            iat: Some(iat),
            exp,
        }
    }

    /// Looks up a payload field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Whether the token never expires
    pub fn is_eternal(&self) -> bool {
        self.exp.is_none()
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| Utc::now().timestamp() > exp)
    }
}
