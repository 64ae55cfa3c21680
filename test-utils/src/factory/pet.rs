//! Pet factory for creating test pet entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    species: String,
    breed: Option<String>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory owned by `user_id`.
    ///
    /// Defaults: name `"Pet {id}"`, species `"chien"`, no breed.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Pet {}", id),
            species: "chien".to_string(),
            breed: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            breed: ActiveValue::Set(self.breed),
            sex: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            photo_url: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values owned by `user_id`.
pub async fn create_pet(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db, user_id).build().await
}
