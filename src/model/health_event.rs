use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::reminder::ReminderDto;

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

/// Health event category as carried on the wire.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum HealthEventKind {
    #[serde(rename = "VACCIN")]
    Vaccin,
    #[serde(rename = "TRAITEMENT")]
    Traitement,
    #[serde(rename = "CONSULTATION")]
    Consultation,
    #[serde(rename = "TOILETTAGE")]
    Toilettage,
    #[serde(rename = "AUTRE")]
    Autre,
}

impl Default for HealthEventKind {
    fn default() -> Self {
        Self::Autre
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HealthEventDto {
    pub id: i32,
    pub pet_id: i32,
    #[serde(rename = "type")]
    pub kind: HealthEventKind,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Present on the nested per-pet listing, which includes reminders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<ReminderDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct CreateHealthEventDto {
    #[serde(rename = "type")]
    pub kind: HealthEventKind,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
}

/// Body of the legacy `POST /health` alias, which carries the pet id in the
/// body and defaults the category to `AUTRE`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct LegacyCreateHealthEventDto {
    #[cfg_attr(feature = "server", validate(range(min = 1)))]
    pub pet_id: i32,
    #[serde(rename = "type", default)]
    pub kind: HealthEventKind,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct UpdateHealthEventDto {
    #[serde(rename = "type")]
    pub kind: Option<HealthEventKind>,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
}
