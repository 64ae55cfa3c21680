use serde::{Deserialize, Serialize};

use crate::model::auth::RoleDto;

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

/// Profile of the authenticated user. Deliberately excludes the account id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProfileDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub role: RoleDto,
}

/// Partial profile update; a provided password is re-hashed before storage.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct UpdateProfileDto {
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub name: Option<String>,
    #[cfg_attr(feature = "server", validate(email))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    #[cfg_attr(feature = "server", validate(length(min = 6)))]
    pub password: Option<String>,
}
