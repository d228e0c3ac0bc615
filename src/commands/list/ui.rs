//! Rendering for the `list` command.

use crate::database::devices::Device;

pub const EMPTY: &str = "📂 No hay seriales registrados todavía.";

/// One line per record under a fixed header. No ordering is promised; records
/// appear as the store returned them.
pub fn format_listing(devices: &[Device]) -> String {
    let mut text = String::from("📋 *Lista de seriales registrados:*\n\n");
    for d in devices {
        text.push_str(&format!(
            "`{}` → {} {} ({})\n",
            d.serial, d.marca, d.modelo, d.estado
        ));
    }
    text
}
