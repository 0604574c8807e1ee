//! Type definitions shared across crates
//!
//! - `response` - The success/failure response envelope

pub mod response;

pub use response::{Envelope, Failure, FailureBody, Reply, DEFAULT_FAILURE_MESSAGE};
