use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ApiStatusDto,
    server::{config::Config, controller, error::AppError, state::AppState},
};

/// Requests allowed per client IP within the one-minute window.
const RATE_LIMIT_PER_MINUTE: u32 = 120;

#[derive(OpenApi)]
#[openapi(
    info(title = "PetCare API", description = "Pet-care management REST API"),
    modifiers(&SecurityAddon),
    tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and login"),
        (name = controller::profile::PROFILE_TAG, description = "Authenticated user profile"),
        (name = controller::pet::PET_TAG, description = "Pets owned by the user"),
        (name = controller::health_event::HEALTH_TAG, description = "Health events per pet"),
        (name = controller::reminder::REMINDER_TAG, description = "Reminders per health event"),
        (name = controller::agenda::AGENDA_TAG, description = "Personal agenda"),
        (name = controller::service::SERVICE_TAG, description = "Nearby services directory"),
        (name = controller::admin::ADMIN_TAG, description = "Administration")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// GET /
/// Unauthenticated liveness probe.
async fn api_status() -> impl IntoResponse {
    Json(ApiStatusDto {
        name: "PetCare API".to_string(),
        status: "ok".to_string(),
    })
}

/// Builds the complete application router.
///
/// Mounts every resource router plus the Swagger UI at `/docs`, then wraps
/// the stack in CORS, security response headers, request tracing, and the
/// per-IP rate limit. The rate limiter keys on the peer address, so the
/// server must be driven with connect-info (see `main`).
pub fn router(config: &Config, state: AppState) -> Result<Router, AppError> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::profile::get_me, controller::profile::update_me))
        .routes(routes!(controller::pet::get_pets, controller::pet::create_pet))
        .routes(routes!(
            controller::pet::get_pet,
            controller::pet::update_pet,
            controller::pet::delete_pet
        ))
        .routes(routes!(
            controller::health_event::list_pet_health_events,
            controller::health_event::create_pet_health_event
        ))
        .routes(routes!(
            controller::health_event::update_health_event,
            controller::health_event::delete_health_event
        ))
        .routes(routes!(
            controller::health_event::legacy_list_health_events,
            controller::health_event::legacy_create_health_event
        ))
        .routes(routes!(
            controller::health_event::legacy_get_health_event,
            controller::health_event::legacy_update_health_event,
            controller::health_event::legacy_delete_health_event
        ))
        .routes(routes!(
            controller::reminder::list_event_reminders,
            controller::reminder::create_event_reminder
        ))
        .routes(routes!(
            controller::reminder::update_reminder,
            controller::reminder::delete_reminder
        ))
        .routes(routes!(
            controller::agenda::get_agenda,
            controller::agenda::create_agenda_event
        ))
        .routes(routes!(
            controller::agenda::update_agenda_event,
            controller::agenda::delete_agenda_event
        ))
        .routes(routes!(
            controller::service::list_services,
            controller::service::create_service
        ))
        .routes(routes!(
            controller::service::update_service,
            controller::service::delete_service
        ))
        .routes(routes!(
            controller::admin::list_users,
            controller::admin::create_user
        ))
        .split_for_parts();

    // Replenish one slot every 500ms: 120 requests per minute sustained.
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(500)
        .burst_size(RATE_LIMIT_PER_MINUTE)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let router = api_router
        .route("/", get(api_status))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    Ok(router)
}

/// A `*` origin allows anyone without credentials; a concrete origin is
/// reflected back with credentials enabled, matching the historical
/// behavior of the API.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origin == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
