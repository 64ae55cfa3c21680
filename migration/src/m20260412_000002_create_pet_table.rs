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
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(integer(Pet::UserId))
                    .col(string(Pet::Name))
                    .col(string(Pet::Species))
                    .col(string_null(Pet::Breed))
                    .col(string_null(Pet::Sex))
                    .col(timestamp_null(Pet::BirthDate))
                    .col(string_null(Pet::PhotoUrl))
                    .col(text_null(Pet::Notes))
                    .col(
                        timestamp(Pet::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_user_id")
                            .from(Pet::Table, Pet::UserId)
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
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    UserId,
    Name,
    Species,
    Breed,
    Sex,
    BirthDate,
    PhotoUrl,
    Notes,
    CreatedAt,
}
