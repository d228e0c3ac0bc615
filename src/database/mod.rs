//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g., `database::devices::find_by_serial`.

pub mod devices;
pub mod init;
