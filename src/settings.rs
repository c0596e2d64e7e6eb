//! User settings
//!
//! A flat JSON object persisted under the user's config directory. Older
//! files written by the desktop build carry keys we no longer read
//! (e.g. `minimize_to_tray`); those are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::DEFAULT_MAX_DENOMINATOR;

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_ENV: &str = "DECIMAL_CONVERTER_SETTINGS";

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_denominator must be at least 1")]
    InvalidDenominator,
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

fn default_max_denominator() -> u32 {
    DEFAULT_MAX_DENOMINATOR
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Hide reference tables
    #[serde(default)]
    pub minimal_ui: bool,

    /// Fraction ladder granularity for nearest-fraction results
    #[serde(default = "default_max_denominator")]
    pub max_denominator: u32,

    /// Print responses as JSON
    #[serde(default)]
    pub json_output: bool,

    /// Last save time, ISO 8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimal_ui: false,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            json_output: false,
            updated_at: None,
        }
    }
}

impl Settings {
    /// Load settings, returning defaults when the file does not exist
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(
                "Ignoring settings file {}: {}. Using defaults.",
                path.display(),
                e
            );
            Self::default()
        })
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&mut self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut stamped = self.clone();
        stamped.updated_at = Some(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string());
        fs::write(path, serde_json::to_string_pretty(&stamped)?)?;
        *self = stamped;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> SettingsResult<()> {
        if self.max_denominator == 0 {
            return Err(SettingsError::InvalidDenominator);
        }
        Ok(())
    }
}

/// Settings path from the environment or the platform config directory
pub fn settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
        return PathBuf::from(path);
    }

    let mut path = std::env::var_os("APPDATA")
        .or_else(|| std::env::var_os("XDG_CONFIG_HOME"))
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("DecimalConverter");
    path.push("settings.json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_denominator, 64);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings {
            minimal_ui: true,
            max_denominator: 32,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert!(settings.updated_at.is_some());

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_legacy_keys_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"minimize_to_tray": true, "minimal_ui": true}"#).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert!(loaded.minimal_ui);
        assert_eq!(loaded.max_denominator, DEFAULT_MAX_DENOMINATOR);
        assert!(!loaded.json_output);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(Settings::load(&path), Err(SettingsError::Json(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"max_denominator": 0}"#).unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::InvalidDenominator)
        ));

        let mut bad = Settings {
            max_denominator: 0,
            ..Settings::default()
        };
        assert!(bad.save(&path).is_err());
    }

    #[test]
    fn test_failed_save_keeps_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();

        // Target is a directory, so the write itself fails
        assert!(matches!(settings.save(dir.path()), Err(SettingsError::Io(_))));
        assert_eq!(settings.updated_at, None);

        let path = dir.path().join("settings.json");
        settings.save(&path).unwrap();
        assert!(settings.updated_at.is_some());
    }
}
