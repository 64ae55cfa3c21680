use entity::health_event::HealthEventType;

use crate::model::health_event::{HealthEventDto, HealthEventKind};

impl From<HealthEventType> for HealthEventKind {
    fn from(kind: HealthEventType) -> Self {
        match kind {
            HealthEventType::Vaccin => HealthEventKind::Vaccin,
            HealthEventType::Traitement => HealthEventKind::Traitement,
            HealthEventType::Consultation => HealthEventKind::Consultation,
            HealthEventType::Toilettage => HealthEventKind::Toilettage,
            HealthEventType::Autre => HealthEventKind::Autre,
        }
    }
}

impl From<HealthEventKind> for HealthEventType {
    fn from(kind: HealthEventKind) -> Self {
        match kind {
            HealthEventKind::Vaccin => HealthEventType::Vaccin,
            HealthEventKind::Traitement => HealthEventType::Traitement,
            HealthEventKind::Consultation => HealthEventType::Consultation,
            HealthEventKind::Toilettage => HealthEventType::Toilettage,
            HealthEventKind::Autre => HealthEventType::Autre,
        }
    }
}

impl From<entity::health_event::Model> for HealthEventDto {
    fn from(event: entity::health_event::Model) -> Self {
        Self {
            id: event.id,
            pet_id: event.pet_id,
            kind: event.event_type.into(),
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            created_at: event.created_at,
            reminders: None,
        }
    }
}

/// Event DTO carrying its reminders, for the nested per-pet listing.
pub fn with_reminders(
    event: entity::health_event::Model,
    reminders: Vec<entity::reminder::Model>,
) -> HealthEventDto {
    let mut dto = HealthEventDto::from(event);
    dto.reminders = Some(reminders.into_iter().map(Into::into).collect());
    dto
}
