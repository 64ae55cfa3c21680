use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReminderDto {
    pub id: i32,
    pub health_event_id: i32,
    pub remind_at: DateTime<Utc>,
    pub sent: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct CreateReminderDto {
    pub remind_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct UpdateReminderDto {
    pub remind_at: Option<DateTime<Utc>>,
    pub sent: Option<bool>,
}
