//! Boundary validation for inbound HTTP payloads.
//!
//! Syntax checks that the domain deliberately leaves to the transport layer
//! live here: email address shape and malformed JSON bodies.

use std::sync::OnceLock;

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use regex::Regex;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidEmail,
    InvalidJson,
    PayloadTooLarge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::PayloadTooLarge => "payload_too_large",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s.]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub(crate) fn invalid_email_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid email address")).with_details(json!({
        "field": field,
        "code": ErrorCode::InvalidEmail.as_str(),
    }))
}

/// Check that `value` looks like `local@domain.tld`.
pub(crate) fn validate_email(value: &str, field: FieldName) -> Result<(), Error> {
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(invalid_email_error(field))
    }
}

/// Map JSON extractor failures onto the standard error envelope.
///
/// Install via `web::JsonConfig::default().error_handler(json_error_handler)`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON payload");
    let error = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            Error::invalid_request("request body is too large").with_details(json!({
                "code": ErrorCode::PayloadTooLarge.as_str(),
            }))
        }
        _ => Error::invalid_request("request body is not valid JSON for this endpoint")
            .with_details(json!({
                "code": ErrorCode::InvalidJson.as_str(),
                "reason": err.to_string(),
            })),
    };
    error.into()
}
