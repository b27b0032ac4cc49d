#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh throwaway SQLite database, fully migrated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("pet_tracker_test_{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let db = models::db::connect_url(&url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
