pub mod error;
pub mod response;

pub use error::ApiError;
pub use response::{failure, respond, success, success_with_code};
