use sea_orm_migration::{prelude::*, schema::*};

use super::m20260412_000003_create_health_event_table::HealthEvent;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reminder::Table)
                    .if_not_exists()
                    .col(pk_auto(Reminder::Id))
                    .col(integer(Reminder::HealthEventId))
                    .col(timestamp(Reminder::RemindAt))
                    .col(boolean(Reminder::Sent).default(false))
                    .col(
                        timestamp(Reminder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_health_event_id")
                            .from(Reminder::Table, Reminder::HealthEventId)
                            .to(HealthEvent::Table, HealthEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reminder {
    Table,
    Id,
    HealthEventId,
    RemindAt,
    Sent,
    CreatedAt,
}
