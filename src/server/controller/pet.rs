use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        pet::{CreatePetDto, PetDetailDto, PetDto, UpdatePetDto},
    },
    server::{
        data::{health_event::HealthEventRepository, pet::PetRepository},
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        model::pet::pet_detail,
        state::AppState,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pets";

/// GET /pets
/// List the caller's pets, newest first.
#[utoipa::path(
    get,
    path = "/pets",
    tag = PET_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Pets of the authenticated user", body = Vec<PetDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_pets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let pets = PetRepository::new(&state.db)
        .get_all_for_user(claims.sub)
        .await?;

    let dtos: Vec<PetDto> = pets.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /pets
/// Create a pet owned by the caller.
#[utoipa::path(
    post,
    path = "/pets",
    tag = PET_TAG,
    security(("bearerAuth" = [])),
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Created pet", body = PetDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let pet = PetRepository::new(&state.db).create(claims.sub, dto).await?;

    Ok((StatusCode::CREATED, Json(PetDto::from(pet))))
}

/// GET /pets/{id}
/// Pet detail including its health events.
///
/// A pet owned by another user is reported as 404, never 403.
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = PET_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet with health events", body = PetDetailDto),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let pet = PetRepository::new(&state.db)
        .get_for_user(id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    let events = HealthEventRepository::new(&state.db)
        .list_for_pet(pet.id)
        .await?;

    Ok((StatusCode::OK, Json(pet_detail(pet, events))))
}

/// PUT /pets/{id}
/// Partial pet update; the ownership filter sits inside the UPDATE itself.
#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = PET_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Pet id")),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "Updated pet", body = PetDto),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let pet = PetRepository::new(&state.db)
        .update_for_user(id, claims.sub, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    Ok((StatusCode::OK, Json(PetDto::from(pet))))
}

/// DELETE /pets/{id}
/// Delete a pet; health events and reminders cascade with it.
#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = PET_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let deleted = PetRepository::new(&state.db)
        .delete_for_user(id, claims.sub)
        .await?;

    if deleted {
        Ok((StatusCode::OK, Json(OkDto { ok: true })))
    } else {
        Err(AppError::NotFound("Pet not found".to_string()))
    }
}
