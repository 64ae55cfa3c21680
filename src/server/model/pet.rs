use crate::model::pet::{PetDetailDto, PetDto};

impl From<entity::pet::Model> for PetDto {
    fn from(pet: entity::pet::Model) -> Self {
        Self {
            id: pet.id,
            user_id: pet.user_id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            sex: pet.sex,
            birth_date: pet.birth_date,
            photo_url: pet.photo_url,
            notes: pet.notes,
            created_at: pet.created_at,
        }
    }
}

/// Builds the pet detail response from the pet and its health events.
pub fn pet_detail(
    pet: entity::pet::Model,
    health_events: Vec<entity::health_event::Model>,
) -> PetDetailDto {
    PetDetailDto {
        pet: pet.into(),
        health_events: health_events.into_iter().map(Into::into).collect(),
    }
}
