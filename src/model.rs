//! This module defines the shared data structures used throughout the application.
//! These structs are used as `TypeMapKey`s to store shared state in Serenity's global context.

use crate::services::lookup::SerialApi;
use serenity::prelude::TypeMapKey;
use sqlx::SqlitePool;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// The connection pool for the SQLite serial registry.
    pub db: SqlitePool,
    /// Client for the external lookup API, consulted when a serial is not
    /// registered locally.
    pub lookup: SerialApi,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
