use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::reminder::UpdateReminderDto,
    server::data::health_event::owned_event_ids,
};

pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reminder for a health event; `sent` starts false.
    pub async fn create(
        &self,
        health_event_id: i32,
        remind_at: DateTime<Utc>,
    ) -> Result<entity::reminder::Model, DbErr> {
        entity::reminder::ActiveModel {
            health_event_id: ActiveValue::Set(health_event_id),
            remind_at: ActiveValue::Set(remind_at),
            sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a health event's reminders ordered by trigger time.
    pub async fn list_for_event(
        &self,
        health_event_id: i32,
    ) -> Result<Vec<entity::reminder::Model>, DbErr> {
        entity::prelude::Reminder::find()
            .filter(entity::reminder::Column::HealthEventId.eq(health_event_id))
            .order_by_asc(entity::reminder::Column::RemindAt)
            .all(self.db)
            .await
    }

    /// Gets a reminder by id, filtered through the full ownership chain
    /// (reminder → health event → pet → user).
    pub async fn get_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::reminder::Model>, DbErr> {
        entity::prelude::Reminder::find_by_id(id)
            .filter(entity::reminder::Column::HealthEventId.in_subquery(owned_event_ids(user_id)))
            .one(self.db)
            .await
    }

    /// Applies a partial update to a reminder the user owns.
    pub async fn update_for_user(
        &self,
        id: i32,
        user_id: i32,
        dto: UpdateReminderDto,
    ) -> Result<Option<entity::reminder::Model>, DbErr> {
        let mut update = entity::prelude::Reminder::update_many()
            .filter(entity::reminder::Column::Id.eq(id))
            .filter(entity::reminder::Column::HealthEventId.in_subquery(owned_event_ids(user_id)));
        let mut changed = false;

        if let Some(remind_at) = dto.remind_at {
            update = update.col_expr(entity::reminder::Column::RemindAt, Expr::value(remind_at));
            changed = true;
        }
        if let Some(sent) = dto.sent {
            update = update.col_expr(entity::reminder::Column::Sent, Expr::value(sent));
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

    /// Deletes a reminder the user owns.
    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reminder::delete_many()
            .filter(entity::reminder::Column::Id.eq(id))
            .filter(entity::reminder::Column::HealthEventId.in_subquery(owned_event_ids(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
