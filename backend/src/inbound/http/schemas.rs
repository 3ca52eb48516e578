//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers below mirror their
//! serialised shape and live in the inbound adapter where framework
//! concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The write would violate a uniqueness constraint.
    #[schema(rename = "conflict")]
    Conflict,
    /// The store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c2a9e-7a51-4f4e-9a63-0f0e2c4b1d2a")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::HitKind`].
#[derive(ToSchema)]
#[schema(as = HitKind)]
pub enum HitKindSchema {
    /// The hit is a user.
    #[schema(rename = "USER")]
    User,
    /// The hit is a company.
    #[schema(rename = "COMPANY")]
    Company,
}

/// OpenAPI schema for [`crate::domain::SearchHit`].
#[derive(ToSchema)]
#[schema(as = SearchHit)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SearchHitSchema {
    /// Identifier of the matching record.
    #[schema(example = 1)]
    id: i64,
    /// Name of the matching record.
    #[schema(example = "Ann")]
    name: String,
    /// Entity the hit refers to.
    #[schema(rename = "type")]
    kind: HitKindSchema,
}
