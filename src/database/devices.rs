//! This module contains all functions for interacting with the `dispositivos` table.
//! It is the single source of truth for registering and retrieving serial records.

use sqlx::SqlitePool;
use tracing::instrument;

/// A registered device record, keyed by its serial.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub serial: String,
    pub marca: String,
    pub modelo: String,
    pub estado: String,
}

/// Outcome of an insert attempt. Records are immutable once registered, so a
/// colliding serial is rejected without touching the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

/// Inserts a new record. The primary key on `serial` enforces uniqueness
/// atomically; a unique violation maps to `Duplicate`, every other failure
/// propagates.
#[instrument(level = "debug", skip(pool, device), fields(serial = %device.serial))]
pub async fn insert_device(
    pool: &SqlitePool,
    device: &Device,
) -> Result<InsertOutcome, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO dispositivos (serial, marca, modelo, estado) VALUES (?, ?, ?, ?)",
    )
    .bind(&device.serial)
    .bind(&device.marca)
    .bind(&device.modelo)
    .bind(&device.estado)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(InsertOutcome::Inserted),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(InsertOutcome::Duplicate),
        Err(e) => Err(e),
    }
}

#[instrument(level = "debug", skip(pool))]
pub async fn find_by_serial(
    pool: &SqlitePool,
    serial: &str,
) -> Result<Option<Device>, sqlx::Error> {
    sqlx::query_as::<_, Device>(
        "SELECT serial, marca, modelo, estado FROM dispositivos WHERE serial = ?",
    )
    .bind(serial)
    .fetch_optional(pool)
    .await
}

/// Returns every registered record in storage order.
#[instrument(level = "debug", skip(pool))]
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Device>, sqlx::Error> {
    sqlx::query_as::<_, Device>("SELECT serial, marca, modelo, estado FROM dispositivos")
        .fetch_all(pool)
        .await
}
