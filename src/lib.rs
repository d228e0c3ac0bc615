// Library entry so integration tests and external tools can reference internal modules.
// The binary (`main.rs`) builds on the same module tree.
pub mod commands;
pub mod constants;
pub mod database;
pub mod handler;
pub mod model;
pub mod services;

// Convenient re-export for the shared state type.
pub use model::AppState;
