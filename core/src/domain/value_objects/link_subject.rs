//! Identity embedded in verification and password reset links.

use serde_json::Value;

use crate::domain::entities::token::Payload;

/// The `{id, email}` pair a link token is issued over
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSubject {
    pub id: Value,
    pub email: String,
}

impl LinkSubject {
    pub fn new(id: impl Into<Value>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }

    /// Token payload for this subject
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert(String::from("id"), self.id.clone());
        payload.insert(String::from("email"), Value::String(self.email.clone()));
        payload
    }
}
