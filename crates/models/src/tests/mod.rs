use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Entity CRUD and finder tests for cars
pub mod car_tests;

/// Registration lookups and composite finder tests for users
pub mod user_tests;

/// Fresh in-memory database with the full schema applied
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn migrations_apply_and_roll_back() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(crate::db::ping(&db).await);

    let status = migration::Migrator::get_pending_migrations(&db).await?;
    assert!(status.is_empty());

    migration::Migrator::down(&db, None).await?;
    let pending = migration::Migrator::get_pending_migrations(&db).await?;
    assert_eq!(pending.len(), 3);
    Ok(())
}
