//! Tests for the token service

#[cfg(test)]
mod link_tests;

use serde_json::Value;

use crate::domain::entities::token::Payload;
use crate::services::token::{TokenService, TokenServiceConfig};

pub(super) const TEST_SECRET: &str = "test-secret-for-unit-tests";

pub(super) fn create_test_service() -> TokenService {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    TokenService::new(TokenServiceConfig::new(TEST_SECRET).with_port(3000))
        .expect("Failed to create token service")
}

pub(super) fn payload(value: Value) -> Payload {
    value.as_object().cloned().expect("payload must be a JSON object")
}
