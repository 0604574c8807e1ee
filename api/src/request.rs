//! Request views for the token layer
//!
//! `HttpRequest` is wrapped so the core `TokenCarrier` and `LinkContext`
//! traits can be implemented for it.

use actix_web::http::header;
use actix_web::HttpRequest;
use serde_json::Value;
use tb_core::services::token::{LinkContext, TokenCarrier};

/// Borrowed view of an inbound request, optionally with its parsed JSON body
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    request: &'a HttpRequest,
    body: Option<&'a Value>,
}

impl<'a> RequestView<'a> {
    pub fn new(request: &'a HttpRequest) -> Self {
        Self { request, body: None }
    }

    /// Attach the parsed body so the `token` body field is consulted
    pub fn with_body(mut self, body: &'a Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl TokenCarrier for RequestView<'_> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.request.cookie(name).map(|cookie| cookie.value().to_string())
    }

    fn header(&self, name: &str) -> Option<String> {
        self.request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    fn body_field(&self, name: &str) -> Option<String> {
        self.body?.get(name)?.as_str().map(str::to_string)
    }
}

/// Link context from what the client declared to this server
///
/// `Forwarded` and `X-Forwarded-*` headers are not consulted, so a client
/// cannot redirect links through them. Deployments behind a proxy must pass
/// the public `Host` through.
impl LinkContext for RequestView<'_> {
    fn scheme(&self) -> String {
        match self.request.uri().scheme_str() {
            Some(scheme) => scheme.to_string(),
            None if self.request.app_config().secure() => String::from("https"),
            None => String::from("http"),
        }
    }

    fn hostname(&self) -> String {
        let host = self
            .host_header()
            .unwrap_or_else(|| self.request.app_config().host().to_string());
        strip_port(&host).to_string()
    }

    fn host_header(&self) -> Option<String> {
        self.request
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| self.request.uri().authority().map(|authority| authority.to_string()))
    }
}

/// Host without its port; bracketed IPv6 literals keep their brackets
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
