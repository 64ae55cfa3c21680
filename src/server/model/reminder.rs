use crate::model::reminder::ReminderDto;

impl From<entity::reminder::Model> for ReminderDto {
    fn from(reminder: entity::reminder::Model) -> Self {
        Self {
            id: reminder.id,
            health_event_id: reminder.health_event_id,
            remind_at: reminder.remind_at,
            sent: reminder.sent,
            created_at: reminder.created_at,
        }
    }
}
