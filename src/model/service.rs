use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

/// Directory entry category as carried on the wire.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum ServiceKind {
    #[serde(rename = "VETERINAIRE")]
    Veterinaire,
    #[serde(rename = "TOILETTEUR")]
    Toiletteur,
    #[serde(rename = "AUTRE")]
    Autre,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServiceDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct CreateServiceDto {
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct UpdateServiceDto {
    #[serde(rename = "type")]
    pub kind: Option<ServiceKind>,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
