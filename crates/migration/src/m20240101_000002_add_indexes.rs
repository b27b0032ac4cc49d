//! Indexes backing the owner, zone and lost-tracker queries.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pet_owner_id")
                    .table(Pet::Table)
                    .col(Pet::OwnerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pet_in_zone")
                    .table(Pet::Table)
                    .col(Pet::InZone)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pet_lost_tracker")
                    .table(Pet::Table)
                    .col(Pet::PetType)
                    .col(Pet::LostTracker)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_pet_owner_id").table(Pet::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pet_in_zone").table(Pet::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pet_lost_tracker").table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pet { Table, OwnerId, InZone, PetType, LostTracker }
