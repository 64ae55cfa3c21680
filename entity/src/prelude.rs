pub use super::agenda_event::Entity as AgendaEvent;
pub use super::health_event::Entity as HealthEvent;
pub use super::pet::Entity as Pet;
pub use super::reminder::Entity as Reminder;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;
