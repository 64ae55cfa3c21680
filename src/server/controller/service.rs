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
        api::{ErrorDto, MessageDto},
        service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        data::service::ServiceRepository,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            validate::ValidatedJson,
        },
        state::AppState,
    },
};

/// Tag for grouping service directory endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "services";

#[derive(Deserialize, IntoParams)]
pub struct ServiceListQuery {
    /// Filter by type; unknown values are ignored rather than rejected.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn parse_service_type(value: &str) -> Option<entity::service::ServiceType> {
    match value {
        "VETERINAIRE" => Some(entity::service::ServiceType::Veterinaire),
        "TOILETTEUR" => Some(entity::service::ServiceType::Toiletteur),
        "AUTRE" => Some(entity::service::ServiceType::Autre),
        _ => None,
    }
}

/// GET /services
/// Public directory listing with a basic type filter. Distance filtering is
/// done client-side.
#[utoipa::path(
    get,
    path = "/services",
    tag = SERVICE_TAG,
    params(ServiceListQuery),
    responses(
        (status = 200, description = "Directory entries", body = Vec<ServiceDto>)
    ),
)]
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service_type = query.kind.as_deref().and_then(parse_service_type);

    let services = ServiceRepository::new(&state.db).list(service_type).await?;

    let dtos: Vec<ServiceDto> = services.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /services
/// Create a directory entry. Admin only.
#[utoipa::path(
    post,
    path = "/services",
    tag = SERVICE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Created entry", body = ServiceDto),
        (status = 403, description = "Admin only", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let service = ServiceRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(ServiceDto::from(service))))
}

/// PATCH /services/{id}
/// Update a directory entry. Admin only.
#[utoipa::path(
    patch,
    path = "/services/{id}",
    tag = SERVICE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Service id")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Updated entry", body = ServiceDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let service = ServiceRepository::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    Ok((StatusCode::OK, Json(ServiceDto::from(service))))
}

/// DELETE /services/{id}
/// Remove a directory entry. Admin only.
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = SERVICE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Deleted", body = MessageDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let deleted = ServiceRepository::new(&state.db).delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Service not found".to_string()))
    }
}
