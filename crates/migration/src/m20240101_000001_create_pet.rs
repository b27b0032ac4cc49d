//! Create the `pet` table.
//!
//! Single-table layout for both variants: `lost_tracker` is nullable and
//! only meaningful for CAT rows.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(
                        ColumnDef::new(Pet::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Pet::PetType, 16).not_null())
                    .col(ColumnDef::new(Pet::TrackerType).string_len(16).null())
                    .col(ColumnDef::new(Pet::OwnerId).integer().null())
                    .col(ColumnDef::new(Pet::InZone).boolean().null())
                    .col(ColumnDef::new(Pet::LostTracker).boolean().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pet { Table, Id, PetType, TrackerType, OwnerId, InZone, LostTracker }
