use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminCreateUserDto, AdminUserDto, AuthUserDto},
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            validate::ValidatedJson,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// GET /admin/users
/// List every account. Admin only.
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = ADMIN_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All accounts", body = Vec<AdminUserDto>),
        (status = 403, description = "Admin only", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let users = UserRepository::new(&state.db).get_all().await?;

    let dtos: Vec<AdminUserDto> = users.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /admin/users
/// Create an account with an explicit role. Admin only.
#[utoipa::path(
    post,
    path = "/admin/users",
    tag = ADMIN_TAG,
    security(("bearerAuth" = [])),
    request_body = AdminCreateUserDto,
    responses(
        (status = 201, description = "Account created", body = AuthUserDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 409, description = "Email already used", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<AdminCreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let auth_service = AuthService::new(&state.db, &state.tokens);
    let user = auth_service.create_user(dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
