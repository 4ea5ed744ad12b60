//! TOML-based application settings.
//!
//! Stores user preferences:
//! - Work configuration (country, weekend days, work system)
//! - The saved shift pattern, if any
//! - Display language and notification toggle
//! - The country-detection marker (the one-shot geolocation lookup runs
//!   at most once)
//!
//! Settings are stored at `~/.config/dawam/config.toml`. An absent or
//! partial file resolves to defaults; absence is never an error.
//! Last-write-wins on a single device.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::calendar::{Lang, WorkConfiguration};
use crate::error::ConfigError;
use crate::shift::ShiftPattern;

/// Application settings.
///
/// Serialized to/from TOML at `~/.config/dawam/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub work: WorkConfiguration,
    /// Saved shift pattern; only consulted when the work system is shift.
    #[serde(default)]
    pub shift_pattern: Option<ShiftPattern>,
    #[serde(default)]
    pub language: Lang,
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Set once geolocation has run (or its fallback applied), so the
    /// lookup happens at most once per install.
    #[serde(default)]
    pub country_detected: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work: WorkConfiguration::default(),
            shift_pattern: None,
            language: Lang::default(),
            notifications: true,
            country_detected: false,
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load settings, defaulting when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load settings from an explicit path (tests point this at a
    /// temporary directory).
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Persist settings (last write wins).
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a value by dotted key path, e.g. `work.country`.
    pub fn get_key(&self, key: &str) -> Result<serde_json::Value, ConfigError> {
        let root = serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let mut current = &root;
        for part in key.split('.') {
            current = current
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        Ok(current.clone())
    }

    /// Set a value by dotted key path. The value string is parsed
    /// according to the existing value's type.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut root = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(String::new()));
        }

        let mut current = &mut root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) | serde_json::Value::Null => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                *self = serde_json::from_value(root).map_err(|e| invalid(e.to_string()))?;
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }
}
