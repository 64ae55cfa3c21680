use axum::http::{header, HeaderMap, HeaderValue};
use chrono::Utc;

use crate::{
    model::auth::RoleDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Claims, Permission},
        service::auth::TokenService,
    },
};

fn token_service() -> TokenService {
    TokenService::new("test-secret")
}

fn user(role: entity::user::UserRole) -> entity::user::Model {
    entity::user::Model {
        id: 7,
        name: "Salma".to_string(),
        email: "salma@petcare.test".to_string(),
        password: "irrelevant".to_string(),
        role,
        phone: None,
        timezone: None,
        language: None,
        created_at: Utc::now(),
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// No Authorization header at all.
///
/// Expected: AuthError::MissingToken (401)
#[test]
fn missing_header_is_rejected() {
    let tokens = token_service();
    let guard = AuthGuard::new(&tokens);

    let result = guard.require(&HeaderMap::new(), &[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Authorization header without the Bearer scheme.
///
/// Expected: AuthError::MissingToken (401)
#[test]
fn non_bearer_scheme_is_rejected() {
    let tokens = token_service();
    let guard = AuthGuard::new(&tokens);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let result = guard.require(&headers, &[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Garbage in place of a signed token.
///
/// Expected: AuthError::InvalidToken (401)
#[test]
fn malformed_token_is_rejected() {
    let tokens = token_service();
    let guard = AuthGuard::new(&tokens);

    let result = guard.require(&bearer_headers("not.a.jwt"), &[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Token signed with a different secret.
///
/// Expected: AuthError::InvalidToken (401)
#[test]
fn foreign_signature_is_rejected() {
    let issuer = TokenService::new("other-secret");
    let token = issuer.issue(&user(entity::user::UserRole::User)).unwrap();

    let tokens = token_service();
    let guard = AuthGuard::new(&tokens);

    let result = guard.require(&bearer_headers(&token), &[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Token past its expiry.
///
/// Expected: AuthError::InvalidToken (401)
#[test]
fn expired_token_is_rejected() {
    let claims = Claims {
        sub: 7,
        role: RoleDto::User,
        email: "salma@petcare.test".to_string(),
        name: "Salma".to_string(),
        iat: Utc::now().timestamp() - 7200,
        exp: Utc::now().timestamp() - 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    let tokens = token_service();
    let guard = AuthGuard::new(&tokens);

    let result = guard.require(&bearer_headers(&token), &[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Happy path: claims flow through untouched.
///
/// Expected: Ok(Claims) matching the issuing user
#[test]
fn valid_token_attaches_claims() {
    let tokens = token_service();
    let issued = tokens.issue(&user(entity::user::UserRole::User)).unwrap();

    let guard = AuthGuard::new(&tokens);
    let claims = guard.require(&bearer_headers(&issued), &[]).unwrap();

    assert_eq!(claims.sub, 7);
    assert_eq!(claims.email, "salma@petcare.test");
    assert_eq!(claims.name, "Salma");
    assert_eq!(claims.role, RoleDto::User);
    assert!(!claims.is_admin());
}

/// The admin gate on a USER-role token.
///
/// Expected: AuthError::AdminOnly (403)
#[test]
fn admin_permission_blocks_user_role() {
    let tokens = token_service();
    let issued = tokens.issue(&user(entity::user::UserRole::User)).unwrap();

    let guard = AuthGuard::new(&tokens);
    let result = guard.require(&bearer_headers(&issued), &[Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminOnly))
    ));
}

/// The admin gate on an ADMIN-role token.
///
/// Expected: Ok(Claims) with the admin role
#[test]
fn admin_permission_passes_admin_role() {
    let tokens = token_service();
    let issued = tokens.issue(&user(entity::user::UserRole::Admin)).unwrap();

    let guard = AuthGuard::new(&tokens);
    let claims = guard
        .require(&bearer_headers(&issued), &[Permission::Admin])
        .unwrap();

    assert!(claims.is_admin());
}
