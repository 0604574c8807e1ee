//! Services containing the token, credential and collection logic.

pub mod collection;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use collection::{ids_all_present, merge_fields, Identifiable};
pub use password::{PasswordHasher, DEFAULT_COST};
pub use token::{
    resolve_token, LinkContext, RequestParts, TokenCarrier, TokenService, TokenServiceConfig,
    TokenSource,
};
