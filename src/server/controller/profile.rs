use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "me";

/// GET /me
/// Profile of the authenticated user. The account id is not exposed.
#[utoipa::path(
    get,
    path = "/me",
    tag = PROFILE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Profile", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let profile = ProfileService::new(&state.db).get(claims.sub).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// PATCH /me
/// Partial profile update. A provided password is re-hashed, so subsequent
/// logins only succeed with the new password.
#[utoipa::path(
    patch,
    path = "/me",
    tag = PROFILE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Validation error or email already used", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let profile = ProfileService::new(&state.db).update(claims.sub, dto).await?;

    Ok((StatusCode::OK, Json(profile)))
}
