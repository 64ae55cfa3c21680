use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        agenda::{AgendaEventDto, CreateAgendaEventDto, UpdateAgendaEventDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        data::agenda_event::AgendaEventRepository,
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        state::AppState,
    },
};

/// Tag for grouping agenda endpoints in OpenAPI documentation
pub static AGENDA_TAG: &str = "agenda";

/// GET /agenda
/// List the caller's agenda events, soonest start first.
#[utoipa::path(
    get,
    path = "/agenda",
    tag = AGENDA_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Agenda events", body = Vec<AgendaEventDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_agenda(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let events = AgendaEventRepository::new(&state.db)
        .list_for_user(claims.sub)
        .await?;

    let dtos: Vec<AgendaEventDto> = events.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /agenda
#[utoipa::path(
    post,
    path = "/agenda",
    tag = AGENDA_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateAgendaEventDto,
    responses(
        (status = 201, description = "Created agenda event", body = AgendaEventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_agenda_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreateAgendaEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let event = AgendaEventRepository::new(&state.db)
        .create(claims.sub, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(AgendaEventDto::from(event))))
}

/// PATCH /agenda/{id}
#[utoipa::path(
    patch,
    path = "/agenda/{id}",
    tag = AGENDA_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Agenda event id")),
    request_body = UpdateAgendaEventDto,
    responses(
        (status = 200, description = "Updated agenda event", body = AgendaEventDto),
        (status = 404, description = "Agenda event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn update_agenda_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateAgendaEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let event = AgendaEventRepository::new(&state.db)
        .update_for_user(id, claims.sub, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Agenda event not found".to_string()))?;

    Ok((StatusCode::OK, Json(AgendaEventDto::from(event))))
}

/// DELETE /agenda/{id}
#[utoipa::path(
    delete,
    path = "/agenda/{id}",
    tag = AGENDA_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Agenda event id")),
    responses(
        (status = 200, description = "Deleted", body = MessageDto),
        (status = 404, description = "Agenda event not found or not owned", body = ErrorDto)
    ),
)]
pub async fn delete_agenda_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let deleted = AgendaEventRepository::new(&state.db)
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
        Err(AppError::NotFound("Agenda event not found".to_string()))
    }
}
