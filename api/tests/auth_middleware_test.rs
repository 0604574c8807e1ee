//! Integration tests for the token authentication middleware

use actix_web::{body::to_bytes, cookie::Cookie, test, web, App, HttpResponse};
use serde_json::{json, Value};
use tb_api::handlers::response;
use tb_api::middleware::auth::{AuthClaims, OptionalAuth, TokenAuth};
use tb_core::domain::value_objects::TokenLifetime;
use tb_core::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "middleware-test-secret";

fn token_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(SECRET)).unwrap()
}

fn issue(payload: Value) -> String {
    token_service().issue(payload.as_object().unwrap()).unwrap()
}

async fn whoami(auth: AuthClaims) -> HttpResponse {
    response::success(Value::Object(auth.payload.clone()))
}

async fn maybe(auth: OptionalAuth) -> HttpResponse {
    response::success(json!({ "authenticated": auth.0.is_some() }))
}

async fn echo(auth: AuthClaims, body: web::Json<Value>) -> HttpResponse {
    response::success(json!({ "id": auth.get("id"), "body": body.into_inner() }))
}

async fn upload(auth: OptionalAuth, body: web::Json<Value>) -> HttpResponse {
    let padding = body["padding"].as_str().map(str::len);
    response::success(json!({ "authenticated": auth.0.is_some(), "padding": padding }))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .wrap(TokenAuth::new())
                .route("/whoami", web::get().to(whoami))
                .route("/maybe", web::get().to(maybe))
                .route("/echo", web::post().to(echo))
                .route("/upload", web::post().to(upload)),
        )
        .await
    };
}

const LARGE_BODY: usize = 300 * 1024;

fn large_body(token: Option<String>) -> Value {
    json!({ "token": token, "padding": "x".repeat(LARGE_BODY) })
}

/// Renders an error raised by the middleware the way the server would
async fn error_json(error: actix_web::Error) -> (u16, Value) {
    let response = error.error_response();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[actix_web::test]
async fn test_missing_token_is_anonymous() {
    let app = app!();

    let req = test::TestRequest::get().uri("/maybe").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({ "status": "success", "data": { "authenticated": false } })
    );
}

#[actix_web::test]
async fn test_required_auth_without_token_is_401() {
    let app = app!();

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "status": "fail", "error": { "message": "Authentication required" } })
    );
}

#[actix_web::test]
async fn test_bearer_token_is_verified() {
    let app = app!();
    let token = issue(json!({ "id": 1, "email": "ada@example.com" }));

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({ "status": "success", "data": { "id": 1, "email": "ada@example.com" } })
    );
}

#[actix_web::test]
async fn test_optional_auth_sees_valid_token() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/maybe")
        .insert_header(("Authorization", format!("Bearer {}", issue(json!({ "id": 2 })))))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["authenticated"], json!(true));
}

#[actix_web::test]
async fn test_cookie_token_takes_precedence() {
    let app = app!();
    let cookie_token = issue(json!({ "id": "cookie" }));
    let header_token = issue(json!({ "id": "header" }));

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", cookie_token))
        .insert_header(("Authorization", format!("Bearer {}", header_token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["id"], json!("cookie"));
}

#[actix_web::test]
async fn test_custom_headers_carry_tokens() {
    let app = app!();

    for header in ["x-access-token", "token"] {
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header, issue(json!({ "id": header }))))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["id"], json!(header));
    }
}

#[actix_web::test]
async fn test_body_token_is_read_and_body_preserved() {
    let app = app!();
    let token = issue(json!({ "id": 5 }));

    let req = test::TestRequest::post()
        .uri("/echo")
        .set_json(json!({ "token": token, "note": "hello" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["id"], json!(5));
    assert_eq!(body["data"]["body"]["note"], json!("hello"));
}

#[actix_web::test]
async fn test_header_wins_over_body_token() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/echo")
        .insert_header(("x-access-token", issue(json!({ "id": "header" }))))
        .set_json(json!({ "token": issue(json!({ "id": "body" })) }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["id"], json!("header"));
}

#[actix_web::test]
async fn test_large_body_without_token_reaches_handler() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/upload")
        .set_json(large_body(None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["data"],
        json!({ "authenticated": false, "padding": LARGE_BODY })
    );
}

#[actix_web::test]
async fn test_large_body_carries_token() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/upload")
        .set_json(large_body(Some(issue(json!({ "id": 1 })))))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["data"],
        json!({ "authenticated": true, "padding": LARGE_BODY })
    );
}

#[actix_web::test]
async fn test_body_over_limit_is_passed_through_unread() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(token_service()))
            .wrap(TokenAuth::new().body_limit(1024))
            .route("/upload", web::post().to(upload)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/upload")
        .set_json(large_body(Some(issue(json!({ "id": 1 })))))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["data"],
        json!({ "authenticated": false, "padding": LARGE_BODY })
    );
}

#[actix_web::test]
async fn test_invalid_token_is_rejected_with_400() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/maybe")
        .insert_header(("Authorization", "Bearer invalid-token"))
        .to_request();
    let error = test::try_call_service(&app, req).await.unwrap_err();

    let (status, body) = error_json(error).await;
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({ "status": "fail", "error": { "message": "Invalid Token" } })
    );
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let app = app!();
    let token = token_service()
        .issue_with_lifetime(
            json!({ "id": 1 }).as_object().unwrap(),
            TokenLifetime::from_seconds(-60),
        )
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", token))
        .to_request();
    let error = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(error_json(error).await.0, 400);
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = app!();
    let foreign = TokenService::new(TokenServiceConfig::new("someone-else"))
        .unwrap()
        .issue(json!({ "id": 1 }).as_object().unwrap())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("x-access-token", foreign))
        .to_request();
    let error = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(error_json(error).await.0, 400);
}

#[actix_web::test]
async fn test_missing_token_service_is_500() {
    let app = test::init_service(
        App::new()
            .wrap(TokenAuth::new())
            .route("/maybe", web::get().to(maybe)),
    )
    .await;

    let req = test::TestRequest::get().uri("/maybe").to_request();
    let error = test::try_call_service(&app, req).await.unwrap_err();

    let (status, body) = error_json(error).await;
    assert_eq!(status, 500);
    assert_eq!(
        body["error"]["message"],
        json!("Some error occurred while processing your Request")
    );
}
