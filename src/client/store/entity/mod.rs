//! SeaORM models for the embedded cache database.
//!
//! Rows mirror server records under string keys (`srv_<id>` for
//! server-derived rows, UUIDs for rows created offline) with timestamps in
//! epoch milliseconds, the shape the mobile UI consumes directly.

pub mod cached_health_event;
pub mod cached_pet;
pub mod cached_reminder;
pub mod cached_user;

pub mod prelude {
    pub use super::cached_health_event::Entity as CachedHealthEvent;
    pub use super::cached_pet::Entity as CachedPet;
    pub use super::cached_reminder::Entity as CachedReminder;
    pub use super::cached_user::Entity as CachedUser;
}
