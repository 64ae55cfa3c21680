//! One-directional pull synchronizer (server → local cache).
//!
//! `pull_all` fetches the account's pets, each pet's health events, and each
//! event's reminders, upserting every record into the local store under its
//! `srv_<id>` key. Nothing flows back to the server: local edits are not
//! pushed, there are no sync cursors, and a failed fetch stops the branch it
//! was working on. The next pull starts from scratch and converges because
//! the upserts are idempotent.

use chrono::Utc;
use thiserror::Error;

use crate::{
    client::{
        api::{self, ApiClient},
        model::error::ApiError,
        store::{
            entity::{
                cached_health_event::{self, CareStatus, LocalEventKind},
                cached_pet,
                cached_reminder::{self, ReminderState},
            },
            server_key, LocalStore,
        },
    },
    model::{health_event::HealthEventDto, pet::PetDto, reminder::ReminderDto},
};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// Maps a server event category onto the local one.
///
/// Exhaustive over the server enum so a new server category is a compile
/// error here rather than a silent fall-through to a default bucket.
pub fn local_event_kind(kind: crate::model::health_event::HealthEventKind) -> LocalEventKind {
    use crate::model::health_event::HealthEventKind;

    match kind {
        HealthEventKind::Vaccin => LocalEventKind::Vaccination,
        HealthEventKind::Traitement => LocalEventKind::Treatment,
        HealthEventKind::Consultation => LocalEventKind::Appointment,
        HealthEventKind::Toilettage => LocalEventKind::OtherCare,
        HealthEventKind::Autre => LocalEventKind::OtherCare,
    }
}

/// Reverse mapping for records created offline.
///
/// Grooming collapsed into `OtherCare` on the way in, so the reverse
/// direction can only produce `AUTRE` for that bucket.
pub fn server_event_kind(kind: LocalEventKind) -> crate::model::health_event::HealthEventKind {
    use crate::model::health_event::HealthEventKind;

    match kind {
        LocalEventKind::Vaccination => HealthEventKind::Vaccin,
        LocalEventKind::Treatment => HealthEventKind::Traitement,
        LocalEventKind::Appointment => HealthEventKind::Consultation,
        LocalEventKind::OtherCare => HealthEventKind::Autre,
    }
}

pub struct SyncManager<'a> {
    api: &'a ApiClient,
    store: &'a LocalStore,
}

impl<'a> SyncManager<'a> {
    pub fn new(api: &'a ApiClient, store: &'a LocalStore) -> Self {
        Self { api, store }
    }

    /// Pulls everything reachable from the signed-in account into the local
    /// cache: pets, then health events per pet, then reminders per event.
    ///
    /// # Arguments
    /// - `local_user_id` - Local cache key of the signed-in user row that
    ///   pulled pets are attached to
    pub async fn pull_all(&self, local_user_id: &str) -> Result<(), SyncError> {
        let pets = api::pet::get_pets(self.api).await?;
        tracing::debug!("Pulled {} pets", pets.len());

        for pet in pets {
            self.store
                .save_pet(cached_pet_from_dto(&pet, local_user_id))
                .await?;

            let events = api::health_event::list_for_pet(self.api, pet.id).await?;
            for event in events {
                self.store.save_event(cached_event_from_dto(&event)).await?;

                let reminders = api::reminder::list_for_event(self.api, event.id).await?;
                for reminder in reminders {
                    self.store
                        .save_reminder(cached_reminder_from_dto(&reminder))
                        .await?;
                }
            }
        }

        Ok(())
    }
}

pub fn cached_pet_from_dto(pet: &PetDto, local_user_id: &str) -> cached_pet::Model {
    cached_pet::Model {
        id: server_key(pet.id),
        user_id: local_user_id.to_string(),
        name: pet.name.clone(),
        species: pet.species.clone(),
        breed: pet.breed.clone(),
        birth_date_ms: pet.birth_date.map(|date| date.timestamp_millis()),
        weight_kg: None,
        photo_url: pet.photo_url.clone(),
        created_ms: Utc::now().timestamp_millis(),
    }
}

pub fn cached_event_from_dto(event: &HealthEventDto) -> cached_health_event::Model {
    cached_health_event::Model {
        id: server_key(event.id),
        pet_id: server_key(event.pet_id),
        kind: local_event_kind(event.kind),
        title: event.title.clone(),
        description: event.description.clone(),
        starts_ms: event.event_date.timestamp_millis(),
        ends_ms: None,
        status: CareStatus::Pending,
        created_ms: Utc::now().timestamp_millis(),
    }
}

pub fn cached_reminder_from_dto(reminder: &ReminderDto) -> cached_reminder::Model {
    cached_reminder::Model {
        id: server_key(reminder.id),
        event_id: server_key(reminder.health_event_id),
        remind_at_ms: reminder.remind_at.timestamp_millis(),
        message: None,
        state: if reminder.sent {
            ReminderState::Sent
        } else {
            ReminderState::Scheduled
        },
        created_ms: Utc::now().timestamp_millis(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::health_event::HealthEventKind;

    fn pet_dto(id: i32) -> PetDto {
        PetDto {
            id,
            user_id: 1,
            name: "Rex".to_string(),
            species: "chien".to_string(),
            breed: Some("berger".to_string()),
            sex: None,
            birth_date: Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).single(),
            photo_url: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
        }
    }

    fn event_dto(id: i32, pet_id: i32, kind: HealthEventKind) -> HealthEventDto {
        HealthEventDto {
            id,
            pet_id,
            kind,
            title: "Rappel vaccin".to_string(),
            description: None,
            event_date: Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap(),
            reminders: None,
        }
    }

    #[test]
    fn event_kind_mapping_covers_every_server_variant() {
        assert_eq!(
            local_event_kind(HealthEventKind::Vaccin),
            LocalEventKind::Vaccination
        );
        assert_eq!(
            local_event_kind(HealthEventKind::Traitement),
            LocalEventKind::Treatment
        );
        assert_eq!(
            local_event_kind(HealthEventKind::Consultation),
            LocalEventKind::Appointment
        );
        assert_eq!(
            local_event_kind(HealthEventKind::Toilettage),
            LocalEventKind::OtherCare
        );
        assert_eq!(
            local_event_kind(HealthEventKind::Autre),
            LocalEventKind::OtherCare
        );
    }

    #[test]
    fn reverse_mapping_round_trips_where_defined() {
        for kind in [
            LocalEventKind::Vaccination,
            LocalEventKind::Treatment,
            LocalEventKind::Appointment,
        ] {
            assert_eq!(local_event_kind(server_event_kind(kind)), kind);
        }

        // The grooming bucket is lossy by construction.
        assert_eq!(
            server_event_kind(LocalEventKind::OtherCare),
            HealthEventKind::Autre
        );
    }

    #[test]
    fn pet_conversion_derives_key_and_millis() {
        let cached = cached_pet_from_dto(&pet_dto(42), "local-user");

        assert_eq!(cached.id, "srv_42");
        assert_eq!(cached.user_id, "local-user");
        assert_eq!(
            cached.birth_date_ms,
            Some(
                Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0)
                    .unwrap()
                    .timestamp_millis()
            )
        );
        assert_eq!(cached.weight_kg, None);
    }

    #[test]
    fn reminder_conversion_maps_sent_flag_to_state() {
        let base = ReminderDto {
            id: 7,
            health_event_id: 3,
            remind_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            sent: false,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap(),
        };

        let scheduled = cached_reminder_from_dto(&base);
        assert_eq!(scheduled.state, ReminderState::Scheduled);
        assert_eq!(scheduled.event_id, "srv_3");

        let sent = cached_reminder_from_dto(&ReminderDto { sent: true, ..base });
        assert_eq!(sent.state, ReminderState::Sent);
    }

    #[tokio::test]
    async fn upserting_the_same_event_twice_converges() -> Result<(), sea_orm::DbErr> {
        let store = LocalStore::open_in_memory().await?;

        store
            .save_pet(cached_pet_from_dto(&pet_dto(1), "local-user"))
            .await?;

        let first = cached_event_from_dto(&event_dto(10, 1, HealthEventKind::Vaccin));
        store.save_event(first).await?;

        // Same server record pulled again with a changed title and category.
        let mut second = cached_event_from_dto(&event_dto(10, 1, HealthEventKind::Consultation));
        second.title = "Visite de contrôle".to_string();
        store.save_event(second).await?;

        let events = store.events_for_pet("srv_1").await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Visite de contrôle");
        assert_eq!(events[0].kind, LocalEventKind::Appointment);

        Ok(())
    }
}
