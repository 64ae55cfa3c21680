use sea_orm_migration::{prelude::*, schema::*};

use super::m20260412_000002_create_pet_table::Pet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HealthEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(HealthEvent::Id))
                    .col(integer(HealthEvent::PetId))
                    .col(string(HealthEvent::Type))
                    .col(string(HealthEvent::Title))
                    .col(text_null(HealthEvent::Description))
                    .col(timestamp(HealthEvent::EventDate))
                    .col(
                        timestamp(HealthEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_event_pet_id")
                            .from(HealthEvent::Table, HealthEvent::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HealthEvent {
    Table,
    Id,
    PetId,
    Type,
    Title,
    Description,
    EventDate,
    CreatedAt,
}
