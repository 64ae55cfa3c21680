use entity::user::UserRole;

use crate::model::{
    auth::{AdminUserDto, AuthUserDto, RoleDto},
    profile::ProfileDto,
};

impl From<UserRole> for RoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => RoleDto::User,
            UserRole::Admin => RoleDto::Admin,
        }
    }
}

impl From<RoleDto> for UserRole {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::User => UserRole::User,
            RoleDto::Admin => UserRole::Admin,
        }
    }
}

/// Public account projection; never includes the password hash.
impl From<entity::user::Model> for AuthUserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.into(),
        }
    }
}

/// Profile projection; deliberately excludes the account id as well.
impl From<entity::user::Model> for ProfileDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            name: user.name,
            email: user.email,
            phone: user.phone,
            timezone: user.timezone,
            language: user.language,
            role: user.role.into(),
        }
    }
}

impl From<entity::user::Model> for AdminUserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.into(),
            phone: user.phone,
            timezone: user.timezone,
            language: user.language,
            created_at: user.created_at,
        }
    }
}

/// Parameters for inserting a user row. Unlike the request DTOs this carries
/// the already-hashed credential and a resolved role.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}

/// Parameters for a profile update; `password_hash` is the re-hashed
/// credential when the caller supplied a new password.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub password_hash: Option<String>,
}
