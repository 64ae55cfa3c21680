use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{ProfileDto, UpdateProfileDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::UpdateProfileParams,
        service::auth::hash_password,
    },
};

/// Service backing the `/me` profile endpoints.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<ProfileDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Applies a partial profile update.
    ///
    /// A changed email must not belong to another account; a provided
    /// password is re-hashed before storage so the following login only
    /// succeeds with the new password.
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - The updated profile
    /// - `Err(AppError::BadRequest)` - Email already used by another account
    pub async fn update(
        &self,
        user_id: i32,
        dto: UpdateProfileDto,
    ) -> Result<ProfileDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &dto.email {
            if user_repo.email_taken_by_other(email, user_id).await? {
                return Err(AppError::BadRequest("Email déjà utilisé".to_string()));
            }
        }

        let password_hash = match &dto.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let updated = user_repo
            .update_profile(
                user_id,
                UpdateProfileParams {
                    name: dto.name,
                    email: dto.email,
                    phone: dto.phone,
                    timezone: dto.timezone,
                    language: dto.language,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::User;
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::model::auth::{LoginDto, RegisterDto};
    use crate::server::error::auth::AuthError;
    use crate::server::service::auth::{AuthService, TokenService};

    async fn register(
        db: &sea_orm::DatabaseConnection,
        tokens: &TokenService,
        email: &str,
    ) -> i32 {
        AuthService::new(db, tokens)
            .register(RegisterDto {
                name: "Salma".to_string(),
                email: email.to_string(),
                password: "old-password".to_string(),
                phone: None,
                timezone: None,
                language: None,
            })
            .await
            .unwrap()
            .id
    }

    /// PATCH /me with a new password, then log in with both passwords.
    ///
    /// Expected: new password accepted, old password rejected
    #[tokio::test]
    async fn password_change_round_trip() {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = TokenService::new("test-secret");

        let user_id = register(db, &tokens, "salma@petcare.test").await;

        ProfileService::new(db)
            .update(
                user_id,
                UpdateProfileDto {
                    password: Some("new-password".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let auth = AuthService::new(db, &tokens);

        let with_new = auth
            .login(LoginDto {
                email: "salma@petcare.test".to_string(),
                password: "new-password".to_string(),
            })
            .await;
        assert!(with_new.is_ok());

        let with_old = auth
            .login(LoginDto {
                email: "salma@petcare.test".to_string(),
                password: "old-password".to_string(),
            })
            .await;
        assert!(matches!(
            with_old,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    /// Changing the email to another account's address.
    ///
    /// Expected: 400 with the historical French message; keeping one's own
    /// address is fine
    #[tokio::test]
    async fn email_change_checks_uniqueness_against_others_only() {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = TokenService::new("test-secret");

        let user_id = register(db, &tokens, "salma@petcare.test").await;
        register(db, &tokens, "peer@petcare.test").await;

        let service = ProfileService::new(db);

        let conflict = service
            .update(
                user_id,
                UpdateProfileDto {
                    email: Some("peer@petcare.test".to_string()),
                    ..Default::default()
                },
            )
            .await;
        match conflict {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "Email déjà utilisé"),
            other => panic!("expected BadRequest, got {:?}", other.err()),
        }

        let keep_own = service
            .update(
                user_id,
                UpdateProfileDto {
                    email: Some("salma@petcare.test".to_string()),
                    name: Some("Salma B.".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(keep_own.name, "Salma B.");
    }

    /// The profile projection never exposes the account id or hash.
    #[tokio::test]
    async fn get_returns_profile_without_id() {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = TokenService::new("test-secret");

        let user_id = register(db, &tokens, "salma@petcare.test").await;

        let profile = ProfileService::new(db).get(user_id).await.unwrap();

        assert_eq!(profile.email, "salma@petcare.test");
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("password").is_none());
    }
}
