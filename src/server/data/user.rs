//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing account records: creation with
//! pre-hashed credentials, lookups by id and email, profile updates, and the
//! queries backing the admin endpoints.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account row.
    ///
    /// The unique index on `email` backs the duplicate check performed by the
    /// auth service; a concurrent duplicate insert surfaces as `Err(DbErr)`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique-constraint violation
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            phone: ActiveValue::Set(params.phone),
            timezone: ActiveValue::Set(params.timezone),
            language: ActiveValue::Set(params.language),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email is used by an account other than `user_id`.
    ///
    /// Used by the profile update to enforce email uniqueness without
    /// tripping on the caller's own current address.
    pub async fn email_taken_by_other(&self, email: &str, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Id.ne(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial profile update and returns the updated row.
    ///
    /// Only the provided fields are written; the update statement is keyed by
    /// the account id so there is no separate existence check to race with.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No such user
    /// - `Err(DbErr)` - Database error
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let mut update = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id));
        let mut changed = false;

        if let Some(name) = params.name {
            update = update.col_expr(entity::user::Column::Name, Expr::value(name));
            changed = true;
        }
        if let Some(email) = params.email {
            update = update.col_expr(entity::user::Column::Email, Expr::value(email));
            changed = true;
        }
        if let Some(phone) = params.phone {
            update = update.col_expr(entity::user::Column::Phone, Expr::value(phone));
            changed = true;
        }
        if let Some(timezone) = params.timezone {
            update = update.col_expr(entity::user::Column::Timezone, Expr::value(timezone));
            changed = true;
        }
        if let Some(language) = params.language {
            update = update.col_expr(entity::user::Column::Language, Expr::value(language));
            changed = true;
        }
        if let Some(password_hash) = params.password_hash {
            update = update.col_expr(entity::user::Column::Password, Expr::value(password_hash));
            changed = true;
        }

        if changed {
            let result = update.exec(self.db).await?;
            if result.rows_affected == 0 {
                return Ok(None);
            }
        }

        self.find_by_id(user_id).await
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to decide whether to seed the default admin
    /// account.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(entity::user::UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all accounts, for the admin user listing.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }
}
