use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AgendaEventDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct CreateAgendaEventDto {
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct UpdateAgendaEventDto {
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
