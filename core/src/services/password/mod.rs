//! Password hashing module

mod hasher;

pub use hasher::{PasswordHasher, DEFAULT_COST};
