//! # Toolbox Core
//!
//! Framework-agnostic primitives for the Toolbox backend: signed token
//! issuance and verification, request token resolution, link building,
//! password hashing and small collection transforms.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
