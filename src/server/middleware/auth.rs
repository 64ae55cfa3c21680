use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::RoleDto,
    server::{
        error::{auth::AuthError, AppError},
        service::auth::TokenService,
    },
};

/// Identity claims carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id of the token subject.
    pub sub: i32,
    pub role: RoleDto,
    pub email: String,
    pub name: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == RoleDto::Admin
    }
}

pub enum Permission {
    Admin,
}

/// Guard protecting routes behind bearer-token authentication.
///
/// Verification is fully stateless: the token signature and expiry are
/// checked and the embedded claims attached to the request, with no user
/// lookup per request.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified identity claims of the caller
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Signature or expiry check failed
    /// - `Err(AuthError::AdminOnly)` - Caller lacks a required permission
    pub fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<Claims, AppError> {
        let header = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let Some(token) = header.strip_prefix("Bearer ") else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin() {
                        return Err(AuthError::AdminOnly.into());
                    }
                }
            }
        }

        Ok(claims)
    }
}
