use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;
#[cfg(feature = "server")]
use validator::Validate;

/// Account role as it appears on the wire and inside token claims.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum RoleDto {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct RegisterDto {
    #[cfg_attr(feature = "server", validate(length(min = 2)))]
    pub name: String,
    #[cfg_attr(feature = "server", validate(email))]
    pub email: String,
    #[cfg_attr(feature = "server", validate(length(min = 6)))]
    pub password: String,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct LoginDto {
    #[cfg_attr(feature = "server", validate(email))]
    pub email: String,
    #[cfg_attr(feature = "server", validate(length(min = 1)))]
    pub password: String,
}

/// Public projection of an account: everything except the password hash.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AuthUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: RoleDto,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LoginResponseDto {
    pub token: String,
    pub user: AuthUserDto,
}

/// Admin listing of an account, including contact and locale details.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: RoleDto,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema, Validate))]
pub struct AdminCreateUserDto {
    #[cfg_attr(feature = "server", validate(length(min = 2)))]
    pub name: String,
    #[cfg_attr(feature = "server", validate(email))]
    pub email: String,
    #[cfg_attr(feature = "server", validate(length(min = 6)))]
    pub password: String,
    pub role: Option<RoleDto>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}
