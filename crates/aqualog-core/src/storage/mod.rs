mod config;
pub mod database;
pub mod record;

pub use config::{Config, NotificationsConfig, QuickAddConfig};
pub use database::Database;
pub use record::{today_key, DayRecord, DAY_STATE_KEY};

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// Defaults to `~/.config/aqualog` (`aqualog-dev` when `AQUALOG_ENV=dev`).
/// `AQUALOG_DATA_DIR` overrides the location entirely; tests use it to
/// stay hermetic.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = if let Ok(explicit) = std::env::var("AQUALOG_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("AQUALOG_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("aqualog-dev")
        } else {
            base_dir.join("aqualog")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
