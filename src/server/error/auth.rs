use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing Bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry verification.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login attempt with an unknown email or a wrong password. The message
    /// never distinguishes the two cases.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An authenticated, non-admin user hit an admin-only route.
    #[error("Admin only")]
    AdminOnly,
}

/// Maps authentication errors to their HTTP responses.
///
/// Missing, invalid, and expired tokens and bad login credentials are all
/// 401 Unauthorized; the admin gate is 403 Forbidden. Messages are the
/// fixed strings the API has always returned, with no distinguishing detail.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingToken | Self::InvalidToken | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::AdminOnly => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
