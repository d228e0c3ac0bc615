//! Contains the core logic for the `add` command.

use crate::database::devices::{self, Device, InsertOutcome};
use sqlx::SqlitePool;

pub const USAGE: &str = "❌ Usa el comando así: /add SERIAL MARCA MODELO ESTADO";
pub const DUPLICATE: &str = "⚠️ Ese serial ya está registrado.";
pub const STORE_FAILURE: &str = "⚠️ No se pudo guardar el registro. Inténtalo de nuevo más tarde.";

/// Builds a device from the raw token list. Requires at least four tokens;
/// everything after the third is joined with single spaces into `estado`.
pub fn parse_args(args: &[&str]) -> Option<Device> {
    if args.len() < 4 {
        return None;
    }
    Some(Device {
        serial: args[0].to_string(),
        marca: args[1].to_string(),
        modelo: args[2].to_string(),
        estado: args[3..].join(" "),
    })
}

pub fn confirmation(serial: &str) -> String {
    format!("✅ Serial `{serial}` registrado correctamente.")
}

/// Inserts the device and renders the outcome as the reply text. A colliding
/// serial is answered with a warning and leaves the stored record untouched.
pub async fn register_device(pool: &SqlitePool, device: &Device) -> String {
    match devices::insert_device(pool, device).await {
        Ok(InsertOutcome::Inserted) => confirmation(&device.serial),
        Ok(InsertOutcome::Duplicate) => DUPLICATE.to_string(),
        Err(e) => {
            tracing::error!(serial = %device.serial, error = ?e, "failed to insert device");
            STORE_FAILURE.to_string()
        }
    }
}
