//! Request payload validation
//!
//! Rules are declared with `validator` derives on the payload type. Every
//! failing rule is reported, not just the first, and fields the payload type
//! does not declare are ignored at deserialization.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::handlers::ApiError;

/// Message of the failure envelope for rejected payloads
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Validates `payload`, turning rule violations into a 400 `ApiError`
///
/// The error's `errors` is an array of `{"field", "message"}` sorted by field.
pub fn validate<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|errors| {
        ApiError::bad_request(VALIDATION_FAILED_MESSAGE).with_errors(field_errors(&errors))
    })
}

/// Flattens nested validation errors into `{"field", "message"}` entries
pub fn field_errors(errors: &ValidationErrors) -> Vec<Value> {
    let mut entries = Vec::new();
    collect(errors, "", &mut entries);
    entries.sort();
    entries
        .into_iter()
        .map(|(field, message)| json!({ "field": field, "message": message }))
        .collect()
}

fn collect(errors: &ValidationErrors, prefix: &str, entries: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = match &failure.message {
                        Some(message) => message.to_string(),
                        None => format!("{} failed the {} rule", path, failure.code),
                    };
                    entries.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, entries),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), entries);
                }
            }
        }
    }
}

/// JSON body extractor that also runs validation
///
/// Malformed JSON and rule violations are both rejected with a 400 failure
/// envelope.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let web::Json(value) = json
                .await
                .map_err(|error| ApiError::bad_request(error.to_string()))?;
            validate(&value)?;
            Ok(ValidatedJson(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Signup {
        #[validate(email(message = "email must be a valid email"))]
        email: String,
        #[validate(length(min = 8))]
        password: String,
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = Signup {
            email: String::from("ada@example.com"),
            password: String::from("long enough"),
        };
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn test_all_violations_are_reported() {
        let payload = Signup {
            email: String::from("not-an-email"),
            password: String::from("short"),
        };

        let error = validate(&payload).unwrap_err();

        assert_eq!(error.code, 400);
        assert_eq!(error.message, VALIDATION_FAILED_MESSAGE);
        assert_eq!(
            error.errors,
            Some(json!([
                { "field": "email", "message": "email must be a valid email" },
                { "field": "password", "message": "password failed the length rule" }
            ]))
        );
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let payload: Signup = serde_json::from_value(json!({
            "email": "ada@example.com",
            "password": "long enough",
            "referrer": "newsletter"
        }))
        .unwrap();

        assert!(validate(&payload).is_ok());
    }
}
