//! User settings persistence
//!
//! - `types`: settings data (audio volumes, match rules, game modes)
//! - `manager`: SettingsStore for file operations

pub mod manager;
pub mod types;

pub use manager::SettingsStore;
pub use types::*;
