//! Pool construction and schema bootstrap for the serial registry file.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// A type alias for the database connection pool (`SqlitePool`).
/// This is used throughout the application to provide a consistent, clear name
/// for the shared database connection state.
pub type DbPool = SqlitePool;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS dispositivos (
    serial TEXT PRIMARY KEY,
    marca TEXT,
    modelo TEXT,
    estado TEXT
)";

/// Opens the registry file, creating it on first run, and ensures the schema
/// exists. Called once at process start; the returned pool is shared for the
/// life of the process.
pub async fn connect(path: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Idempotent schema creation, separated from `connect` so tests can apply it
/// to an in-memory database.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}
