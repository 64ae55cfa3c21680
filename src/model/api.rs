use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub message: String,
}

/// Confirmation body for deletes that report `{ message: "Deleted" }`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    pub message: String,
}

/// Confirmation body for deletes that report `{ ok: true }`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct OkDto {
    pub ok: bool,
}

/// One field-level problem inside a validation error response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ValidationIssueDto {
    /// Path of the offending field, e.g. `"email"`.
    pub path: String,
    pub message: String,
}

/// 400 response body listing every field that failed validation.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ValidationErrorDto {
    pub message: String,
    pub issues: Vec<ValidationIssueDto>,
}

/// Body of the unauthenticated root status route.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ApiStatusDto {
    pub name: String,
    pub status: String,
}
