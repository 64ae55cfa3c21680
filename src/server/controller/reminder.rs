use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reminder::{CreateReminderDto, ReminderDto, UpdateReminderDto},
    },
    server::{
        data::{health_event::HealthEventRepository, reminder::ReminderRepository},
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        state::AppState,
    },
};

/// Tag for grouping reminder endpoints in OpenAPI documentation
pub static REMINDER_TAG: &str = "reminders";

/// GET /health-events/{healthEventId}/reminders
/// List a health event's reminders ordered by trigger time.
#[utoipa::path(
    get,
    path = "/health-events/{healthEventId}/reminders",
    tag = REMINDER_TAG,
    security(("bearerAuth" = [])),
    params(("healthEventId" = i32, Path, description = "Health event id")),
    responses(
        (status = 200, description = "Reminders", body = Vec<ReminderDto>),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn list_event_reminders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(health_event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    HealthEventRepository::new(&state.db)
        .get_for_user(health_event_id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Health event not found".to_string()))?;

    let reminders = ReminderRepository::new(&state.db)
        .list_for_event(health_event_id)
        .await?;

    let dtos: Vec<ReminderDto> = reminders.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /health-events/{healthEventId}/reminders
/// Create a reminder; the sent flag starts false.
#[utoipa::path(
    post,
    path = "/health-events/{healthEventId}/reminders",
    tag = REMINDER_TAG,
    security(("bearerAuth" = [])),
    params(("healthEventId" = i32, Path, description = "Health event id")),
    request_body = CreateReminderDto,
    responses(
        (status = 201, description = "Created reminder", body = ReminderDto),
        (status = 404, description = "Health event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn create_event_reminder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(health_event_id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<CreateReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    HealthEventRepository::new(&state.db)
        .get_for_user(health_event_id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Health event not found".to_string()))?;

    let reminder = ReminderRepository::new(&state.db)
        .create(health_event_id, dto.remind_at)
        .await?;

    Ok((StatusCode::CREATED, Json(ReminderDto::from(reminder))))
}

/// PATCH /reminders/{id}
/// Update trigger time or the sent flag.
#[utoipa::path(
    patch,
    path = "/reminders/{id}",
    tag = REMINDER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Reminder id")),
    request_body = UpdateReminderDto,
    responses(
        (status = 200, description = "Updated reminder", body = ReminderDto),
        (status = 404, description = "Reminder not found or not owned", body = ErrorDto)
    ),
)]
pub async fn update_reminder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let reminder = ReminderRepository::new(&state.db)
        .update_for_user(id, claims.sub, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Reminder not found".to_string()))?;

    Ok((StatusCode::OK, Json(ReminderDto::from(reminder))))
}

/// DELETE /reminders/{id}
#[utoipa::path(
    delete,
    path = "/reminders/{id}",
    tag = REMINDER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Reminder id")),
    responses(
        (status = 200, description = "Deleted", body = MessageDto),
        (status = 404, description = "Reminder not found or not owned", body = ErrorDto)
    ),
)]
pub async fn delete_reminder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let deleted = ReminderRepository::new(&state.db)
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
        Err(AppError::NotFound("Reminder not found".to_string()))
    }
}
