pub use sea_orm_migration::prelude::*;

mod m20260412_000001_create_user_table;
mod m20260412_000002_create_pet_table;
mod m20260412_000003_create_health_event_table;
mod m20260412_000004_create_reminder_table;
mod m20260413_000005_create_agenda_event_table;
mod m20260413_000006_create_service_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260412_000001_create_user_table::Migration),
            Box::new(m20260412_000002_create_pet_table::Migration),
            Box::new(m20260412_000003_create_health_event_table::Migration),
            Box::new(m20260412_000004_create_reminder_table::Migration),
            Box::new(m20260413_000005_create_agenda_event_table::Migration),
            Box::new(m20260413_000006_create_service_table::Migration),
        ]
    }
}
