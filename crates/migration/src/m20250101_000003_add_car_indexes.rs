//! Indexes backing the car finders (availability, type, price range)
//! and the email lookup on users.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cars: available listing
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_available")
                    .table(Cars::Table)
                    .col(Cars::Available)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Cars: type filter
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_type")
                    .table(Cars::Table)
                    .col(Cars::Type)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Cars: price range filter
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_daily_rate")
                    .table(Cars::Table)
                    .col(Cars::DailyRate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Users: email + password lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_users_email").table(Users::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_cars_daily_rate").table(Cars::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_cars_type").table(Cars::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_cars_available").table(Cars::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cars { Table, Available, Type, DailyRate }

#[derive(DeriveIden)]
enum Users { Table, Email }
