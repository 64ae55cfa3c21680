//! Embedded offline cache.
//!
//! A single-writer SQLite database giving the UI something to render
//! without the network. The schema is created from the entity definitions
//! when the store opens; upserts are idempotent by key so a re-run of the
//! pull sync converges instead of duplicating rows.

pub mod entity;

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Schema,
};

/// Key under which a server-derived record is cached locally.
pub fn server_key(id: i32) -> String {
    format!("srv_{}", id)
}

/// Key for a record created offline, before it has any server id.
pub fn new_local_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub struct LocalStore {
    db: DatabaseConnection,
}

impl LocalStore {
    /// Opens the cache database and creates any missing tables from the
    /// entity definitions.
    pub async fn open(url: &str) -> Result<Self, DbErr> {
        let db = Database::connect(url).await?;

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let statements = vec![
            schema
                .create_table_from_entity(entity::prelude::CachedUser)
                .if_not_exists()
                .to_owned(),
            schema
                .create_table_from_entity(entity::prelude::CachedPet)
                .if_not_exists()
                .to_owned(),
            schema
                .create_table_from_entity(entity::prelude::CachedHealthEvent)
                .if_not_exists()
                .to_owned(),
            schema
                .create_table_from_entity(entity::prelude::CachedReminder)
                .if_not_exists()
                .to_owned(),
        ];

        for stmt in statements {
            db.execute(&stmt).await?;
        }

        Ok(Self { db })
    }

    /// In-memory store, used by tests and previews.
    pub async fn open_in_memory() -> Result<Self, DbErr> {
        Self::open("sqlite::memory:").await
    }

    pub async fn save_user(&self, user: entity::cached_user::Model) -> Result<(), DbErr> {
        let active = entity::cached_user::ActiveModel {
            id: ActiveValue::Set(user.id),
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            photo_url: ActiveValue::Set(user.photo_url),
            created_ms: ActiveValue::Set(user.created_ms),
            active: ActiveValue::Set(user.active),
            server_id: ActiveValue::Set(user.server_id),
            pending_sync: ActiveValue::Set(user.pending_sync),
            modified_ms: ActiveValue::Set(user.modified_ms),
        };

        entity::prelude::CachedUser::insert(active)
            .on_conflict(
                OnConflict::column(entity::cached_user::Column::Id)
                    .update_columns([
                        entity::cached_user::Column::Name,
                        entity::cached_user::Column::Email,
                        entity::cached_user::Column::PasswordHash,
                        entity::cached_user::Column::PhotoUrl,
                        entity::cached_user::Column::Active,
                        entity::cached_user::Column::ServerId,
                        entity::cached_user::Column::PendingSync,
                        entity::cached_user::Column::ModifiedMs,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn save_pet(&self, pet: entity::cached_pet::Model) -> Result<(), DbErr> {
        let active = entity::cached_pet::ActiveModel {
            id: ActiveValue::Set(pet.id),
            user_id: ActiveValue::Set(pet.user_id),
            name: ActiveValue::Set(pet.name),
            species: ActiveValue::Set(pet.species),
            breed: ActiveValue::Set(pet.breed),
            birth_date_ms: ActiveValue::Set(pet.birth_date_ms),
            weight_kg: ActiveValue::Set(pet.weight_kg),
            photo_url: ActiveValue::Set(pet.photo_url),
            created_ms: ActiveValue::Set(pet.created_ms),
        };

        entity::prelude::CachedPet::insert(active)
            .on_conflict(
                OnConflict::column(entity::cached_pet::Column::Id)
                    .update_columns([
                        entity::cached_pet::Column::UserId,
                        entity::cached_pet::Column::Name,
                        entity::cached_pet::Column::Species,
                        entity::cached_pet::Column::Breed,
                        entity::cached_pet::Column::BirthDateMs,
                        entity::cached_pet::Column::WeightKg,
                        entity::cached_pet::Column::PhotoUrl,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn save_event(
        &self,
        event: entity::cached_health_event::Model,
    ) -> Result<(), DbErr> {
        let active = entity::cached_health_event::ActiveModel {
            id: ActiveValue::Set(event.id),
            pet_id: ActiveValue::Set(event.pet_id),
            kind: ActiveValue::Set(event.kind),
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            starts_ms: ActiveValue::Set(event.starts_ms),
            ends_ms: ActiveValue::Set(event.ends_ms),
            status: ActiveValue::Set(event.status),
            created_ms: ActiveValue::Set(event.created_ms),
        };

        entity::prelude::CachedHealthEvent::insert(active)
            .on_conflict(
                OnConflict::column(entity::cached_health_event::Column::Id)
                    .update_columns([
                        entity::cached_health_event::Column::PetId,
                        entity::cached_health_event::Column::Kind,
                        entity::cached_health_event::Column::Title,
                        entity::cached_health_event::Column::Description,
                        entity::cached_health_event::Column::StartsMs,
                        entity::cached_health_event::Column::EndsMs,
                        entity::cached_health_event::Column::Status,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn save_reminder(
        &self,
        reminder: entity::cached_reminder::Model,
    ) -> Result<(), DbErr> {
        let active = entity::cached_reminder::ActiveModel {
            id: ActiveValue::Set(reminder.id),
            event_id: ActiveValue::Set(reminder.event_id),
            remind_at_ms: ActiveValue::Set(reminder.remind_at_ms),
            message: ActiveValue::Set(reminder.message),
            state: ActiveValue::Set(reminder.state),
            created_ms: ActiveValue::Set(reminder.created_ms),
        };

        entity::prelude::CachedReminder::insert(active)
            .on_conflict(
                OnConflict::column(entity::cached_reminder::Column::Id)
                    .update_columns([
                        entity::cached_reminder::Column::EventId,
                        entity::cached_reminder::Column::RemindAtMs,
                        entity::cached_reminder::Column::Message,
                        entity::cached_reminder::Column::State,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn pets_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::cached_pet::Model>, DbErr> {
        entity::prelude::CachedPet::find()
            .filter(entity::cached_pet::Column::UserId.eq(user_id))
            .order_by_asc(entity::cached_pet::Column::Name)
            .all(&self.db)
            .await
    }

    pub async fn events_for_pet(
        &self,
        pet_id: &str,
    ) -> Result<Vec<entity::cached_health_event::Model>, DbErr> {
        entity::prelude::CachedHealthEvent::find()
            .filter(entity::cached_health_event::Column::PetId.eq(pet_id))
            .order_by_desc(entity::cached_health_event::Column::StartsMs)
            .all(&self.db)
            .await
    }

    pub async fn reminders_for_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<entity::cached_reminder::Model>, DbErr> {
        entity::prelude::CachedReminder::find()
            .filter(entity::cached_reminder::Column::EventId.eq(event_id))
            .order_by_asc(entity::cached_reminder::Column::RemindAtMs)
            .all(&self.db)
            .await
    }

    pub async fn get_user(
        &self,
        id: &str,
    ) -> Result<Option<entity::cached_user::Model>, DbErr> {
        entity::prelude::CachedUser::find_by_id(id).one(&self.db).await
    }
}
