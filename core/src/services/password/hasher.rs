//! bcrypt password hashing

use tb_shared::PasswordConfig;
use tracing::debug;

use crate::errors::{DomainError, DomainResult};

/// Work factor applied unless configured otherwise
pub const DEFAULT_COST: u32 = 10;

/// One-way password hashing and verification
///
/// Hashes are self-describing (`$2b$<cost>$<salt><digest>`), so verification
/// needs nothing besides the plaintext and the stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Hasher with [`DEFAULT_COST`]
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_COST)
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::with_cost(config.cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes `plaintext` under a fresh random salt
    ///
    /// Only a cost outside bcrypt's 4..=31 range makes this fail.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|error| DomainError::Internal {
            message: format!("Password hashing failed: {}", error),
        })
    }

    /// Checks `plaintext` against a stored hash
    ///
    /// A structurally invalid hash counts as a mismatch.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(error) => {
                debug!(%error, "stored password hash is malformed");
                false
            }
        }
    }
}
