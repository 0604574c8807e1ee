//! Envelope rendering

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tb_shared::{Failure, Reply};

/// Renders a reply as a JSON response with its status code
///
/// Codes outside the valid HTTP range fall back to 500.
pub fn respond<T: Serialize>(reply: Reply<T>) -> HttpResponse {
    let status = StatusCode::from_u16(reply.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(reply.body)
}

/// `{"status": "success", "data": data}` with 200
pub fn success<T: Serialize>(data: T) -> HttpResponse {
    respond(Reply::success(data))
}

/// `{"status": "success", "data": data}` with `code`
pub fn success_with_code<T: Serialize>(data: T, code: u16) -> HttpResponse {
    respond(Reply::success(data).with_code(code))
}

/// `{"status": "fail", "error": {...}}` with the failure's code
pub fn failure(failure: Failure) -> HttpResponse {
    respond(failure.into_reply::<()>())
}
