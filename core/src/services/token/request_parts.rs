//! Framework-agnostic request snapshot

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::entities::token::Payload;

use super::links::LinkContext;
use super::resolver::TokenCarrier;

/// Owned view of the request data the token layer reads
///
/// Header names are stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParts {
    cookies: HashMap<String, String>,
    headers: HashMap<String, String>,
    body: Payload,
    scheme: String,
    hostname: String,
    host_header: Option<String>,
}

impl RequestParts {
    pub fn new(scheme: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = body;
        self
    }

    pub fn with_body_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    pub fn with_host_header(mut self, host: impl Into<String>) -> Self {
        self.host_header = Some(host.into());
        self
    }
}

impl TokenCarrier for RequestParts {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_ascii_lowercase()).cloned()
    }

    fn body_field(&self, name: &str) -> Option<String> {
        self.body.get(name).and_then(Value::as_str).map(str::to_string)
    }
}

impl LinkContext for RequestParts {
    fn scheme(&self) -> String {
        self.scheme.clone()
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn host_header(&self) -> Option<String> {
        self.host_header.clone()
    }
}
