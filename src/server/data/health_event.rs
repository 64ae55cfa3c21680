use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    model::health_event::UpdateHealthEventDto,
    server::data::pet::owned_pet_ids,
};

/// Subquery selecting the ids of every health event reachable through the
/// caller's ownership chain (event → pet → user).
pub fn owned_event_ids(user_id: i32) -> SelectStatement {
    entity::prelude::HealthEvent::find()
        .select_only()
        .column(entity::health_event::Column::Id)
        .filter(entity::health_event::Column::PetId.in_subquery(owned_pet_ids(user_id)))
        .into_query()
}

pub struct HealthEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a health event for a pet.
    ///
    /// Ownership of the pet must already be established by the caller; this
    /// only performs the insert.
    pub async fn create(
        &self,
        pet_id: i32,
        event_type: entity::health_event::HealthEventType,
        title: String,
        description: Option<String>,
        event_date: chrono::DateTime<Utc>,
    ) -> Result<entity::health_event::Model, DbErr> {
        entity::health_event::ActiveModel {
            pet_id: ActiveValue::Set(pet_id),
            event_type: ActiveValue::Set(event_type),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            event_date: ActiveValue::Set(event_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a pet's health events with their reminders, most recent event
    /// date first.
    pub async fn list_for_pet_with_reminders(
        &self,
        pet_id: i32,
    ) -> Result<Vec<(entity::health_event::Model, Vec<entity::reminder::Model>)>, DbErr> {
        entity::prelude::HealthEvent::find()
            .filter(entity::health_event::Column::PetId.eq(pet_id))
            .order_by_desc(entity::health_event::Column::EventDate)
            .find_with_related(entity::prelude::Reminder)
            .all(self.db)
            .await
    }

    /// Gets a pet's health events without reminders, newest first.
    pub async fn list_for_pet(
        &self,
        pet_id: i32,
    ) -> Result<Vec<entity::health_event::Model>, DbErr> {
        entity::prelude::HealthEvent::find()
            .filter(entity::health_event::Column::PetId.eq(pet_id))
            .order_by_desc(entity::health_event::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the health events of every pet the user owns, newest first.
    ///
    /// Backs the legacy `/health` listing when no pet filter is given.
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::health_event::Model>, DbErr> {
        entity::prelude::HealthEvent::find()
            .filter(entity::health_event::Column::PetId.in_subquery(owned_pet_ids(user_id)))
            .order_by_desc(entity::health_event::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a health event by id, filtered by the caller's ownership chain.
    pub async fn get_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::health_event::Model>, DbErr> {
        entity::prelude::HealthEvent::find_by_id(id)
            .filter(entity::health_event::Column::PetId.in_subquery(owned_pet_ids(user_id)))
            .one(self.db)
            .await
    }

    /// Applies a partial update to a health event the user owns.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated event
    /// - `Ok(None)` - No such event in the caller's ownership chain
    pub async fn update_for_user(
        &self,
        id: i32,
        user_id: i32,
        dto: UpdateHealthEventDto,
    ) -> Result<Option<entity::health_event::Model>, DbErr> {
        let mut update = entity::prelude::HealthEvent::update_many()
            .filter(entity::health_event::Column::Id.eq(id))
            .filter(entity::health_event::Column::PetId.in_subquery(owned_pet_ids(user_id)));
        let mut changed = false;

        if let Some(kind) = dto.kind {
            let event_type: entity::health_event::HealthEventType = kind.into();
            update = update.col_expr(entity::health_event::Column::EventType, Expr::value(event_type));
            changed = true;
        }
        if let Some(title) = dto.title {
            update = update.col_expr(entity::health_event::Column::Title, Expr::value(title));
            changed = true;
        }
        if let Some(description) = dto.description {
            update = update.col_expr(
                entity::health_event::Column::Description,
                Expr::value(description),
            );
            changed = true;
        }
        if let Some(event_date) = dto.event_date {
            update = update.col_expr(
                entity::health_event::Column::EventDate,
                Expr::value(event_date),
            );
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

    /// Deletes a health event the user owns; cascades to its reminders.
    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::HealthEvent::delete_many()
            .filter(entity::health_event::Column::Id.eq(id))
            .filter(entity::health_event::Column::PetId.in_subquery(owned_pet_ids(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
