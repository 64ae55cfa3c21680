use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::health_event::HealthEventDto;

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PetDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Pet detail: the pet plus its health events, newest first.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PetDetailDto {
    #[serde(flatten)]
    pub pet: PetDto,
    pub health_events: Vec<HealthEventDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct CreatePetDto {
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub name: String,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub species: String,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "server", validate(url))]
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

/// Partial pet update. `birthDate` distinguishes "absent" (leave as is)
/// from an explicit `null` (clear the stored date).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct UpdatePetDto {
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub name: Option<String>,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub species: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<DateTime<Utc>>))]
    pub birth_date: Option<Option<DateTime<Utc>>>,
    #[cfg_attr(feature = "server", validate(url))]
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}
