//! Create `cars` table.
//!
//! Rental fleet; the identifier is generated by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(string_len(Cars::Model, 128).not_null())
                    .col(string_len(Cars::Company, 128).not_null())
                    .col(double(Cars::DailyRate).not_null())
                    .col(
                        ColumnDef::new(Cars::ImageUrl)
                            .string_len(1024)
                            .null(),
                    )
                    .col(boolean(Cars::Available).not_null().default(true))
                    .col(
                        ColumnDef::new(Cars::Type)
                            .string_len(64)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cars::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cars { Table, Id, Model, Company, DailyRate, ImageUrl, Available, Type }
