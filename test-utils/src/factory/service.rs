//! Service directory entry factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::service::ServiceType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    service_type: ServiceType,
    name: String,
}

impl<'a> ServiceFactory<'a> {
    /// Defaults: type VETERINAIRE, name `"Clinique {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            service_type: ServiceType::Veterinaire,
            name: format!("Clinique {}", id),
        }
    }

    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = service_type;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            service_type: ActiveValue::Set(self.service_type),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            hours: ActiveValue::Set(None),
            lat: ActiveValue::Set(None),
            lng: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a directory entry with default values.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db).build().await
}
