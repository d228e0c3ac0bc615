// Central constants for command routing and configuration defaults.
pub const COMMAND_PREFIX: &str = "/";

// Used when DATABASE_PATH / SERIAL_API_URL are absent from the environment.
pub const DEFAULT_DATABASE_PATH: &str = "seriales.db";
pub const DEFAULT_SERIAL_API_URL: &str = "https://kevinunlock-api.onrender.com/api/check";

// Links shown as buttons under the welcome message.
pub const SITE_URL: &str = "https://kevinunlock.netlify.app/";
pub const RULES_URL: &str = "https://discord.gg/kevinunlock";
