//! Token authentication middleware.
//!
//! Resolves the request token by the core precedence (cookie, `Authorization`,
//! `x-access-token`, `token` header, body), verifies it with the
//! `TokenService` from app data and injects the claims into the request.
//!
//! A request without any token passes through anonymously; handlers decide
//! whether that is acceptable by extracting [`AuthClaims`] or [`OptionalAuth`].
//! A token that fails verification is rejected with 400 `Invalid Token`.
//!
//! JSON bodies are only read when no cookie or header carried a token, and
//! only up to the middleware's body limit. Larger bodies reach the handler
//! unread, subject to the handler's own extractor limits.

use actix_web::{
    dev::{self, Service, ServiceRequest, ServiceResponse, Transform},
    error::PayloadError,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::{future::LocalBoxFuture, stream, Stream, StreamExt};
use serde_json::Value;
use std::{
    future::{ready, Ready},
    ops::Deref,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};
use tb_core::{
    domain::entities::token::Claims,
    services::token::{resolve_token, TokenService, TokenSource},
};

use crate::handlers::ApiError;
use crate::request::RequestView;

/// Verified claims injected into requests that carried a valid token
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl AuthClaims {
    pub fn into_inner(self) -> Claims {
        self.0
    }
}

impl Deref for AuthClaims {
    type Target = Claims;

    fn deref(&self) -> &Claims {
        &self.0
    }
}

/// Largest JSON body searched for a `token` field, the `web::Json` default
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

type BodyStream = Pin<Box<dyn Stream<Item = Result<web::Bytes, PayloadError>>>>;

/// Token authentication middleware factory
#[derive(Debug, Clone, Copy)]
pub struct TokenAuth {
    body_limit: usize,
}

impl TokenAuth {
    pub fn new() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Sets how many body bytes are buffered while looking for a body token
    pub fn body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for TokenAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
            body_limit: self.body_limit,
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
    body_limit: usize,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let body_limit = self.body_limit;

        Box::pin(async move {
            let mut req = req;

            let Some(tokens) = req.app_data::<web::Data<TokenService>>().cloned() else {
                log::error!("TokenAuth is mounted without a TokenService in app data");
                return Err(ApiError::internal().into());
            };

            let token = match resolve_token(&RequestView::new(req.request())) {
                Some(token) => Some(token),
                None if has_json_body(&req) => token_from_body(&mut req, body_limit).await?,
                None => None,
            };

            if let Some(token) = token {
                let claims = tokens.verify(&token).map_err(ApiError::from)?;
                req.extensions_mut().insert(AuthClaims(claims));
            }

            service.call(req).await
        })
    }
}

fn has_json_body(req: &ServiceRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("application/json"))
}

fn declared_length(req: &ServiceRequest) -> Option<usize> {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Reads the `token` body field, putting the buffered body back for the handler
///
/// Stops reading once `limit` is exceeded; the bytes read so far are replayed
/// ahead of the rest of the stream and no body token is taken.
async fn token_from_body(req: &mut ServiceRequest, limit: usize) -> Result<Option<String>, Error> {
    if declared_length(req).is_some_and(|length| length > limit) {
        return Ok(None);
    }

    let mut payload = req.take_payload();
    let mut buffered = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        buffered.extend_from_slice(&chunk?);

        if buffered.len() > limit {
            let head = stream::once(ready(Ok::<_, PayloadError>(buffered.freeze())));
            let body: BodyStream = Box::pin(head.chain(payload));
            req.set_payload(dev::Payload::Stream { payload: body });
            return Ok(None);
        }
    }

    let bytes = buffered.freeze();
    req.set_payload(dev::Payload::from(bytes.clone()));

    let Ok(body) = serde_json::from_slice::<Value>(&bytes) else {
        return Ok(None);
    };
    Ok(TokenSource::Body.extract(&RequestView::new(req.request()).with_body(&body)))
}

/// Extractor for required authentication
impl FromRequest for AuthClaims {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthClaims>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized().into());

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthClaims>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthClaims>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
