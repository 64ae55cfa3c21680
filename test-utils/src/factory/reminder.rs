//! Reminder factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ReminderFactory<'a> {
    db: &'a DatabaseConnection,
    health_event_id: i32,
    remind_at: DateTime<Utc>,
    sent: bool,
}

impl<'a> ReminderFactory<'a> {
    /// Creates a new ReminderFactory for `health_event_id`.
    ///
    /// Defaults: trigger in one day, not sent.
    pub fn new(db: &'a DatabaseConnection, health_event_id: i32) -> Self {
        Self {
            db,
            health_event_id,
            remind_at: Utc::now() + Duration::days(1),
            sent: false,
        }
    }

    pub fn remind_at(mut self, remind_at: DateTime<Utc>) -> Self {
        self.remind_at = remind_at;
        self
    }

    pub fn sent(mut self, sent: bool) -> Self {
        self.sent = sent;
        self
    }

    pub async fn build(self) -> Result<entity::reminder::Model, DbErr> {
        entity::reminder::ActiveModel {
            health_event_id: ActiveValue::Set(self.health_event_id),
            remind_at: ActiveValue::Set(self.remind_at),
            sent: ActiveValue::Set(self.sent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reminder with default values for `health_event_id`.
pub async fn create_reminder(
    db: &DatabaseConnection,
    health_event_id: i32,
) -> Result<entity::reminder::Model, DbErr> {
    ReminderFactory::new(db, health_event_id).build().await
}
