//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts and live in the inbound
//! adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request collides with existing state, such as a taken username.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "username too long")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::RegisteredUser`].
///
/// Public view of a registered user; passwords are never exposed.
#[derive(ToSchema)]
#[schema(as = crate::domain::RegisteredUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegisteredUserSchema {
    /// Unique username, at most 20 characters.
    #[schema(example = "alice")]
    username: String,
    /// Contact email address.
    #[schema(example = "alice@example.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::Operation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Operation)]
pub enum OperationSchema {
    /// Sum of the operands.
    #[schema(rename = "add")]
    Add,
    /// Absolute difference of the operands.
    #[schema(rename = "subtract")]
    Subtract,
    /// Product of the operands.
    #[schema(rename = "multiply")]
    Multiply,
    /// Larger operand divided by the smaller.
    #[schema(rename = "divide")]
    Divide,
}
