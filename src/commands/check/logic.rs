//! Contains the core logic for the `check` command: local-first lookup with
//! remote fallback.

use crate::database::devices::{self, Device};
use crate::services::lookup::{RemoteReply, SerialApi};
use sqlx::SqlitePool;

pub const USAGE: &str = "❌ Usa /check SERIAL";
pub const STORE_FAILURE: &str =
    "⚠️ No se pudo consultar el registro. Inténtalo de nuevo más tarde.";

/// Renders the record card shown for both local and remote hits.
pub fn format_device(serial: &str, marca: &str, modelo: &str, estado: &str) -> String {
    format!("📱 *Serial:* `{serial}`\n- Marca: {marca}\n- Modelo: {modelo}\n- Estado: {estado}")
}

pub fn format_remote(serial: &str, reply: &RemoteReply) -> String {
    match reply {
        RemoteReply::Error { error } => format!("⚠️ {error}"),
        RemoteReply::Found {
            marca,
            modelo,
            estado,
        } => format_device(serial, marca, modelo, estado),
    }
}

/// Resolves a serial. The local store wins; only a local miss reaches the
/// remote API, and it is queried at most once. Every path produces exactly
/// one reply string.
pub async fn check_serial(pool: &SqlitePool, api: &SerialApi, serial: &str) -> String {
    match devices::find_by_serial(pool, serial).await {
        Ok(Some(Device {
            marca,
            modelo,
            estado,
            ..
        })) => format_device(serial, &marca, &modelo, &estado),
        Ok(None) => match api.lookup(serial).await {
            Ok(reply) => format_remote(serial, &reply),
            Err(e) => format!("❌ Error al conectar con la API: {e}"),
        },
        Err(e) => {
            tracing::error!(serial = %serial, error = ?e, "failed to query device");
            STORE_FAILURE.to_string()
        }
    }
}
