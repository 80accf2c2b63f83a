//! Database module for SQLite persistence using SeaORM

pub mod entities;
pub mod games;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;

/// Initialize database connection and create tables
pub async fn init_database(db_path: &Path) -> Result<DatabaseConnection, DbErr> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
    tracing::info!("Connecting to database: {}", db_url);

    let db = Database::connect(&db_url).await?;

    create_tables(&db).await?;

    Ok(db)
}

/// Create the games table if it doesn't exist.
///
/// `id` carries no uniqueness constraint. There is no migration
/// path beyond this statement; schema changes need manual intervention.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id TEXT NOT NULL,
            game_name TEXT NOT NULL,
            creator_name TEXT,
            background BLOB,
            bird BLOB,
            ground BLOB,
            tube1 BLOB,
            tube2 BLOB,
            sfx_hit BLOB,
            sfx_point BLOB,
            sfx_wing BLOB,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#.to_string(),
    )).await?;

    // Lookups are always by id
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"CREATE INDEX IF NOT EXISTS idx_games_id ON games(id)"#.to_string(),
    )).await?;

    tracing::info!("Database tables initialized");
    Ok(())
}
