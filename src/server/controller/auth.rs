use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{AuthUserDto, LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::AppError, middleware::validate::ValidatedJson, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// POST /auth/register
/// Register a new account. The response never contains the password hash.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthUserDto),
        (status = 400, description = "Validation error", body = ValidationErrorDto),
        (status = 409, description = "Email already used", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);
    let user = auth_service.register(dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login
/// Exchange credentials for a bearer token.
///
/// Unknown email and wrong password both return 401 with the same message.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);
    let response = auth_service.login(dto).await?;

    Ok((StatusCode::OK, Json(response)))
}
