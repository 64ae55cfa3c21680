use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::agenda::{CreateAgendaEventDto, UpdateAgendaEventDto};

/// Agenda events hang directly off the user, so every query filters on
/// `user_id` alone rather than a transitive chain.
pub struct AgendaEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgendaEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateAgendaEventDto,
    ) -> Result<entity::agenda_event::Model, DbErr> {
        entity::agenda_event::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(dto.title),
            event_type: ActiveValue::Set(dto.kind),
            start_at: ActiveValue::Set(dto.start_at),
            end_at: ActiveValue::Set(dto.end_at),
            notes: ActiveValue::Set(dto.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the user's agenda, soonest start first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::agenda_event::Model>, DbErr> {
        entity::prelude::AgendaEvent::find()
            .filter(entity::agenda_event::Column::UserId.eq(user_id))
            .order_by_asc(entity::agenda_event::Column::StartAt)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::agenda_event::Model>, DbErr> {
        entity::prelude::AgendaEvent::find_by_id(id)
            .filter(entity::agenda_event::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Applies a partial update to an agenda event the user owns.
    pub async fn update_for_user(
        &self,
        id: i32,
        user_id: i32,
        dto: UpdateAgendaEventDto,
    ) -> Result<Option<entity::agenda_event::Model>, DbErr> {
        let mut update = entity::prelude::AgendaEvent::update_many()
            .filter(entity::agenda_event::Column::Id.eq(id))
            .filter(entity::agenda_event::Column::UserId.eq(user_id));
        let mut changed = false;

        if let Some(title) = dto.title {
            update = update.col_expr(entity::agenda_event::Column::Title, Expr::value(title));
            changed = true;
        }
        if let Some(kind) = dto.kind {
            update = update.col_expr(entity::agenda_event::Column::EventType, Expr::value(kind));
            changed = true;
        }
        if let Some(start_at) = dto.start_at {
            update = update.col_expr(entity::agenda_event::Column::StartAt, Expr::value(start_at));
            changed = true;
        }
        if let Some(end_at) = dto.end_at {
            update = update.col_expr(entity::agenda_event::Column::EndAt, Expr::value(end_at));
            changed = true;
        }
        if let Some(notes) = dto.notes {
            update = update.col_expr(entity::agenda_event::Column::Notes, Expr::value(notes));
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

    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AgendaEvent::delete_many()
            .filter(entity::agenda_event::Column::Id.eq(id))
            .filter(entity::agenda_event::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
