use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, OkDto},
        health_event::{
            CreateHealthEventDto, HealthEventDto, LegacyCreateHealthEventDto, UpdateHealthEventDto,
        },
    },
    server::{
        data::{health_event::HealthEventRepository, pet::PetRepository},
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        model::health_event::with_reminders,
        state::AppState,
    },
};

/// Tag for grouping health event endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// GET /pets/{petId}/health-events
/// List a pet's health events with their reminders, most recent first.
///
/// Returns 404 when the pet does not exist or belongs to another user,
/// without distinguishing the two.
#[utoipa::path(
    get,
    path = "/pets/{petId}/health-events",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("petId" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Health events with reminders", body = Vec<HealthEventDto>),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn list_pet_health_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    PetRepository::new(&state.db)
        .get_for_user(pet_id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    let events = HealthEventRepository::new(&state.db)
        .list_for_pet_with_reminders(pet_id)
        .await?;

    let dtos: Vec<HealthEventDto> = events
        .into_iter()
        .map(|(event, reminders)| with_reminders(event, reminders))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /pets/{petId}/health-events
/// Create a health event for an owned pet.
#[utoipa::path(
    post,
    path = "/pets/{petId}/health-events",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("petId" = i32, Path, description = "Pet id")),
    request_body = CreateHealthEventDto,
    responses(
        (status = 201, description = "Created health event", body = HealthEventDto),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn create_pet_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(pet_id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<CreateHealthEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    PetRepository::new(&state.db)
        .get_for_user(pet_id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    let event = HealthEventRepository::new(&state.db)
        .create(
            pet_id,
            dto.kind.into(),
            dto.title,
            dto.description,
            dto.event_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(HealthEventDto::from(event))))
}

/// PATCH /health-events/{id}
/// Partial update of a health event in the caller's ownership chain.
#[utoipa::path(
    patch,
    path = "/health-events/{id}",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Health event id")),
    request_body = UpdateHealthEventDto,
    responses(
        (status = 200, description = "Updated health event", body = HealthEventDto),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn update_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateHealthEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let event = HealthEventRepository::new(&state.db)
        .update_for_user(id, claims.sub, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Health event not found".to_string()))?;

    Ok((StatusCode::OK, Json(HealthEventDto::from(event))))
}

/// DELETE /health-events/{id}
#[utoipa::path(
    delete,
    path = "/health-events/{id}",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Health event id")),
    responses(
        (status = 200, description = "Deleted", body = MessageDto),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn delete_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let deleted = HealthEventRepository::new(&state.db)
        .delete_for_user(id, claims.sub)
        .await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Health event not found".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Compatibility endpoints (some tests/scripts use /health)
// These are thin aliases over the canonical routes above.
// ---------------------------------------------------------------------------

#[derive(Deserialize, IntoParams)]
pub struct LegacyHealthQuery {
    /// Restrict the listing to one pet.
    #[serde(rename = "petId")]
    pub pet_id: Option<i32>,
}

/// POST /health
/// Legacy create with the pet id in the body; type defaults to AUTRE.
#[utoipa::path(
    post,
    path = "/health",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    request_body = LegacyCreateHealthEventDto,
    responses(
        (status = 201, description = "Created health event", body = HealthEventDto),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn legacy_create_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<LegacyCreateHealthEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    PetRepository::new(&state.db)
        .get_for_user(dto.pet_id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet introuvable".to_string()))?;

    let event = HealthEventRepository::new(&state.db)
        .create(
            dto.pet_id,
            dto.kind.into(),
            dto.title,
            dto.description,
            dto.event_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(HealthEventDto::from(event))))
}

/// GET /health
/// Legacy listing; without `petId` it returns events across all owned pets.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(LegacyHealthQuery),
    responses(
        (status = 200, description = "Health events", body = Vec<HealthEventDto>),
        (status = 404, description = "Pet not found or not owned", body = ErrorDto)
    ),
)]
pub async fn legacy_list_health_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LegacyHealthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let event_repo = HealthEventRepository::new(&state.db);

    let events = match query.pet_id {
        Some(pet_id) => {
            PetRepository::new(&state.db)
                .get_for_user(pet_id, claims.sub)
                .await?
                .ok_or_else(|| AppError::NotFound("Pet introuvable".to_string()))?;

            event_repo.list_for_pet(pet_id).await?
        }
        None => event_repo.list_for_user(claims.sub).await?,
    };

    let dtos: Vec<HealthEventDto> = events.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /health/{id}
#[utoipa::path(
    get,
    path = "/health/{id}",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Health event id")),
    responses(
        (status = 200, description = "Health event", body = HealthEventDto),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn legacy_get_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let event = HealthEventRepository::new(&state.db)
        .get_for_user(id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("HealthEvent introuvable".to_string()))?;

    Ok((StatusCode::OK, Json(HealthEventDto::from(event))))
}

/// PUT /health/{id}
#[utoipa::path(
    put,
    path = "/health/{id}",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Health event id")),
    request_body = UpdateHealthEventDto,
    responses(
        (status = 200, description = "Updated health event", body = HealthEventDto),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn legacy_update_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateHealthEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let event = HealthEventRepository::new(&state.db)
        .update_for_user(id, claims.sub, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("HealthEvent introuvable".to_string()))?;

    Ok((StatusCode::OK, Json(HealthEventDto::from(event))))
}

/// DELETE /health/{id}
#[utoipa::path(
    delete,
    path = "/health/{id}",
    tag = HEALTH_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Health event id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn legacy_delete_health_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let deleted = HealthEventRepository::new(&state.db)
        .delete_for_user(id, claims.sub)
        .await?;

    if deleted {
        Ok((StatusCode::OK, Json(OkDto { ok: true })))
    } else {
        Err(AppError::NotFound("HealthEvent introuvable".to_string()))
    }
}
