use crate::model::agenda::AgendaEventDto;

impl From<entity::agenda_event::Model> for AgendaEventDto {
    fn from(event: entity::agenda_event::Model) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            title: event.title,
            kind: event.event_type,
            start_at: event.start_at,
            end_at: event.end_at,
            notes: event.notes,
            created_at: event.created_at,
        }
    }
}
