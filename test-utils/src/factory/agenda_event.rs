//! Agenda event factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AgendaEventFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    start_at: DateTime<Utc>,
}

impl<'a> AgendaEventFactory<'a> {
    /// Creates a new AgendaEventFactory owned by `user_id`.
    ///
    /// Defaults: title `"Appointment {id}"`, start in three days.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Appointment {}", id),
            start_at: Utc::now() + Duration::days(3),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = start_at;
        self
    }

    pub async fn build(self) -> Result<entity::agenda_event::Model, DbErr> {
        entity::agenda_event::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            event_type: ActiveValue::Set(None),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an agenda event with default values owned by `user_id`.
pub async fn create_agenda_event(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::agenda_event::Model, DbErr> {
    AgendaEventFactory::new(db, user_id).build().await
}
