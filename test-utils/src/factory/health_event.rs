//! Health event factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::health_event::HealthEventType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct HealthEventFactory<'a> {
    db: &'a DatabaseConnection,
    pet_id: i32,
    event_type: HealthEventType,
    title: String,
    event_date: DateTime<Utc>,
}

impl<'a> HealthEventFactory<'a> {
    /// Creates a new HealthEventFactory for `pet_id`.
    ///
    /// Defaults: type VACCIN, title `"Event {id}"`, event date one week out.
    pub fn new(db: &'a DatabaseConnection, pet_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            pet_id,
            event_type: HealthEventType::Vaccin,
            title: format!("Event {}", id),
            event_date: Utc::now() + Duration::days(7),
        }
    }

    pub fn event_type(mut self, event_type: HealthEventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = event_date;
        self
    }

    pub async fn build(self) -> Result<entity::health_event::Model, DbErr> {
        entity::health_event::ActiveModel {
            pet_id: ActiveValue::Set(self.pet_id),
            event_type: ActiveValue::Set(self.event_type),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            event_date: ActiveValue::Set(self.event_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a health event with default values for `pet_id`.
pub async fn create_health_event(
    db: &DatabaseConnection,
    pet_id: i32,
) -> Result<entity::health_event::Model, DbErr> {
    HealthEventFactory::new(db, pet_id).build().await
}
