//! User settings for spendwatch

use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SpendError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_unknown_fields_in_settings_file_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version": 1, "currency_symbol": "R", "date_format": "%d/%m/%Y"}"#,
        )
        .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "R");
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "R");
        assert!(paths.settings_file().exists());

        // Second load reads the file it just wrote
        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.currency_symbol, settings.currency_symbol);
    }
}
