//! Unit tests for verification and password reset links

use serde_json::json;

use super::create_test_service;
use crate::domain::value_objects::LinkSubject;
use crate::services::token::RequestParts;

fn token_of(link: &str) -> &str {
    link.split_once("?token=").map(|(_, token)| token).unwrap()
}

#[test]
fn test_verification_link_on_localhost_appends_port() {
    let service = create_test_service();
    let ctx = RequestParts::new("http", "localhost").with_host_header("localhost");

    let link = service
        .build_verification_link(&ctx, &LinkSubject::new(1, "ada@example.com"))
        .unwrap();

    assert!(link.starts_with("http://localhost:3000/v1.0/api/auth/verify?token="));
}

#[test]
fn test_verification_link_uses_hostname_elsewhere() {
    let service = create_test_service();
    let ctx = RequestParts::new("https", "api.example.com").with_host_header("api.example.com:8443");

    let link = service
        .build_verification_link(&ctx, &LinkSubject::new(1, "ada@example.com"))
        .unwrap();

    assert!(link.starts_with("https://api.example.com/v1.0/api/auth/verify?token="));
}

#[test]
fn test_verification_link_token_carries_subject() {
    let service = create_test_service();
    let ctx = RequestParts::new("http", "localhost");

    let link = service
        .build_verification_link(&ctx, &LinkSubject::new("u-42", "ada@example.com"))
        .unwrap();
    let claims = service.verify(token_of(&link)).unwrap();

    assert_eq!(claims.get("id"), Some(&json!("u-42")));
    assert_eq!(claims.get("email"), Some(&json!("ada@example.com")));
    assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 86_400);
}

#[test]
fn test_password_reset_link_uses_host_header_verbatim() {
    let service = create_test_service();
    let ctx = RequestParts::new("http", "localhost").with_host_header("localhost:5173");

    let link = service
        .build_password_reset_link(&ctx, &LinkSubject::new(7, "grace@example.com"))
        .unwrap();

    assert!(link.starts_with("http://localhost:5173/v1.0/api/auth/reset-password/email?token="));
}

#[test]
fn test_password_reset_link_expires_in_five_hours() {
    let service = create_test_service();
    let ctx = RequestParts::new("https", "api.example.com").with_host_header("api.example.com");

    let link = service
        .build_password_reset_link(&ctx, &LinkSubject::new(7, "grace@example.com"))
        .unwrap();
    let claims = service.verify(token_of(&link)).unwrap();

    assert_eq!(claims.get("id"), Some(&json!(7)));
    assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 5 * 3600);
}

#[test]
fn test_password_reset_link_without_host_header_falls_back_to_hostname() {
    let service = create_test_service();
    let ctx = RequestParts::new("https", "api.example.com");

    let link = service
        .build_password_reset_link(&ctx, &LinkSubject::new(7, "grace@example.com"))
        .unwrap();

    assert!(link.starts_with("https://api.example.com/v1.0/api/auth/reset-password/email?token="));
}
