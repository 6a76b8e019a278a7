//! TOML-based application configuration.
//!
//! Covers the concerns that are not part of the persisted day state:
//! - Notification preferences
//! - Quick-add preset volumes
//!
//! Stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Re-fire the reminder on every periodic check while overdue,
    /// instead of once per overdue episode.
    #[serde(default)]
    pub repeat_when_overdue: bool,
}

/// Quick-add preset volumes in milliliters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAddConfig {
    #[serde(default = "default_cup_ml")]
    pub cup_ml: u32,
    #[serde(default = "default_glass_ml")]
    pub glass_ml: u32,
    #[serde(default = "default_bottle_ml")]
    pub bottle_ml: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub quick_add: QuickAddConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_cup_ml() -> u32 {
    150
}
fn default_glass_ml() -> u32 {
    250
}
fn default_bottle_ml() -> u32 {
    500
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            repeat_when_overdue: false,
        }
    }
}

impl Default for QuickAddConfig {
    fn default() -> Self {
        Self {
            cup_ml: default_cup_ml(),
            glass_ml: default_glass_ml(),
            bottle_ml: default_bottle_ml(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: NotificationsConfig::default(),
            quick_add: QuickAddConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "notifications.enabled" => self.notifications.enabled.to_string(),
            "notifications.repeat_when_overdue" => {
                self.notifications.repeat_when_overdue.to_string()
            }
            "quick_add.cup_ml" => self.quick_add.cup_ml.to_string(),
            "quick_add.glass_ml" => self.quick_add.glass_ml.to_string(),
            "quick_add.bottle_ml" => self.quick_add.bottle_ml.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "notifications.enabled" => self.notifications.enabled = parse_bool(key, value)?,
            "notifications.repeat_when_overdue" => {
                self.notifications.repeat_when_overdue = parse_bool(key, value)?;
            }
            "quick_add.cup_ml" => self.quick_add.cup_ml = parse_ml(key, value)?,
            "quick_add.glass_ml" => self.quick_add.glass_ml = parse_ml(key, value)?,
            "quick_add.bottle_ml" => self.quick_add.bottle_ml = parse_ml(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as bool"),
    })
}

fn parse_ml(key: &str, value: &str) -> Result<u32, ConfigError> {
    let ml: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as milliliters"),
    })?;
    if ml == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "volume must be positive".to_string(),
        });
    }
    Ok(ml)
}
