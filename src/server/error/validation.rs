use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ValidationErrorDto, ValidationIssueDto};

/// Request-shape validation failure carrying field-level issues.
///
/// Produced either from `validator` derive checks on a request DTO or from
/// a body that could not be deserialized at all (wrong types, missing
/// required fields, unknown enum values).
#[derive(Error, Debug)]
#[error("Validation error")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssueDto>,
}

impl ValidationError {
    /// Single-issue failure for bodies rejected before field validation ran.
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssueDto {
                path: "body".to_string(),
                message: message.into(),
            }],
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let issues = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationIssueDto {
                    path: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for constraint '{}'", e.code)),
                })
            })
            .collect();

        Self { issues }
    }
}

/// 400 Bad Request with the structured issue list.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                message: "Validation error".to_string(),
                issues: self.issues,
            }),
        )
            .into_response()
    }
}
