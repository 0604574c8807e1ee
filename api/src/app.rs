//! Application factory
//!
//! Registers the shared token service and password hasher, mounts the token
//! authentication middleware and provides the health and fallback routes.

use actix_web::{dev::ServiceFactory, dev::ServiceRequest, dev::ServiceResponse, web, App, Error};
use serde_json::json;
use tb_core::services::{PasswordHasher, TokenService};

use crate::handlers::{response, ApiError};
use crate::middleware::TokenAuth;

/// Create and configure the application with its shared services
pub fn create_app(
    tokens: web::Data<TokenService>,
    hasher: web::Data<PasswordHasher>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(tokens)
        .app_data(hasher)
        .wrap(TokenAuth::new())
        .route("/health", web::get().to(health_check))
        .default_service(web::route().to(not_found))
}

async fn health_check() -> actix_web::HttpResponse {
    response::success(json!({
        "status": "healthy",
        "service": "toolbox-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::not_found())
}
