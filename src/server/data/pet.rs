use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::model::pet::{CreatePetDto, UpdatePetDto};

/// Subquery selecting the ids of every pet owned by `user_id`.
///
/// Embedded in the WHERE clause of statements touching pet-owned resources so
/// the ownership check and the mutation are a single atomic statement.
pub fn owned_pet_ids(user_id: i32) -> SelectStatement {
    entity::prelude::Pet::find()
        .select_only()
        .column(entity::pet::Column::Id)
        .filter(entity::pet::Column::UserId.eq(user_id))
        .into_query()
}

pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pet owned by `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreatePetDto,
    ) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(dto.name),
            species: ActiveValue::Set(dto.species),
            breed: ActiveValue::Set(dto.breed),
            sex: ActiveValue::Set(dto.sex),
            birth_date: ActiveValue::Set(dto.birth_date),
            photo_url: ActiveValue::Set(dto.photo_url),
            notes: ActiveValue::Set(dto.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all pets of a user, newest first.
    pub async fn get_all_for_user(&self, user_id: i32) -> Result<Vec<entity::pet::Model>, DbErr> {
        entity::prelude::Pet::find()
            .filter(entity::pet::Column::UserId.eq(user_id))
            .order_by_desc(entity::pet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a pet by id, filtered by ownership.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The pet, owned by `user_id`
    /// - `Ok(None)` - No such pet, or owned by someone else
    pub async fn get_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::pet::Model>, DbErr> {
        entity::prelude::Pet::find_by_id(id)
            .filter(entity::pet::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Applies a partial update to a pet the user owns.
    ///
    /// The ownership filter is part of the UPDATE statement itself; a pet
    /// deleted or re-owned concurrently simply yields `Ok(None)`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated pet
    /// - `Ok(None)` - No such pet owned by `user_id`
    pub async fn update_for_user(
        &self,
        id: i32,
        user_id: i32,
        dto: UpdatePetDto,
    ) -> Result<Option<entity::pet::Model>, DbErr> {
        let mut update = entity::prelude::Pet::update_many()
            .filter(entity::pet::Column::Id.eq(id))
            .filter(entity::pet::Column::UserId.eq(user_id));
        let mut changed = false;

        if let Some(name) = dto.name {
            update = update.col_expr(entity::pet::Column::Name, Expr::value(name));
            changed = true;
        }
        if let Some(species) = dto.species {
            update = update.col_expr(entity::pet::Column::Species, Expr::value(species));
            changed = true;
        }
        if let Some(breed) = dto.breed {
            update = update.col_expr(entity::pet::Column::Breed, Expr::value(breed));
            changed = true;
        }
        if let Some(sex) = dto.sex {
            update = update.col_expr(entity::pet::Column::Sex, Expr::value(sex));
            changed = true;
        }
        // Some(None) clears the stored birth date, absence leaves it alone.
        if let Some(birth_date) = dto.birth_date {
            update = update.col_expr(entity::pet::Column::BirthDate, Expr::value(birth_date));
            changed = true;
        }
        if let Some(photo_url) = dto.photo_url {
            update = update.col_expr(entity::pet::Column::PhotoUrl, Expr::value(photo_url));
            changed = true;
        }
        if let Some(notes) = dto.notes {
            update = update.col_expr(entity::pet::Column::Notes, Expr::value(notes));
            changed = true;
        }

        if changed {
            let result = update.exec(self.db).await?;
            if result.rows_affected == 0 {
                return Ok(None);
            }
        }

        self.get_for_user(id, user_id).await
    }

    /// Deletes a pet the user owns; cascades to its health events and their
    /// reminders.
    ///
    /// # Returns
    /// - `Ok(true)` - Pet deleted
    /// - `Ok(false)` - No such pet owned by `user_id`
    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pet::delete_many()
            .filter(entity::pet::Column::Id.eq(id))
            .filter(entity::pet::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
