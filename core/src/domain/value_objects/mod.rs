//! Value objects representing immutable domain concepts.

pub mod lifetime;
pub mod link_subject;

pub use lifetime::TokenLifetime;
pub use link_subject::LinkSubject;
