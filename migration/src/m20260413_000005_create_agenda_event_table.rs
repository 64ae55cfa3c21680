use sea_orm_migration::{prelude::*, schema::*};

use super::m20260412_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgendaEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(AgendaEvent::Id))
                    .col(integer(AgendaEvent::UserId))
                    .col(string(AgendaEvent::Title))
                    .col(string_null(AgendaEvent::Type))
                    .col(timestamp(AgendaEvent::StartAt))
                    .col(timestamp_null(AgendaEvent::EndAt))
                    .col(text_null(AgendaEvent::Notes))
                    .col(
                        timestamp(AgendaEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agenda_event_user_id")
                            .from(AgendaEvent::Table, AgendaEvent::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgendaEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AgendaEvent {
    Table,
    Id,
    UserId,
    Title,
    Type,
    StartAt,
    EndAt,
    Notes,
    CreatedAt,
}
