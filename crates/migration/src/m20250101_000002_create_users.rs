//! Create `users` table keyed by username.
//!
//! Passwords are stored as given; there is no credential table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(string_len(Users::Username, 64).primary_key())
                    .col(ColumnDef::new(Users::FullName).string_len(128).null())
                    .col(ColumnDef::new(Users::Email).string_len(255).null())
                    .col(string_len(Users::Password, 255).not_null())
                    .col(ColumnDef::new(Users::Phone).string_len(32).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Username, FullName, Email, Password, Phone }
