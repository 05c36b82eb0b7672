//! User settings for the family ledger
//!
//! Settings describe how the command-line shell drives the ledger: which file
//! to use, which currency entries are settled in, and what to call the two
//! earners. Ledger-level values (exchange rate, incomes) live in the ledger
//! file itself.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Currency;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file name used when `--file` is not given
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Currency new entries are converted into before being stored
    #[serde(default)]
    pub settlement_currency: Currency,

    /// Display name of the first earner
    #[serde(default = "default_first_earner")]
    pub first_earner: String,

    /// Display name of the second earner
    #[serde(default = "default_second_earner")]
    pub second_earner: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_file() -> String {
    "budget.csv".to_string()
}

fn default_first_earner() -> String {
    "Babu".to_string()
}

fn default_second_earner() -> String {
    "Mamu".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_file: default_file(),
            settlement_currency: Currency::default(),
            first_earner: default_first_earner(),
            second_earner: default_second_earner(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_file, "budget.csv");
        assert_eq!(settings.settlement_currency, Currency::Gbp);
        assert_eq!(settings.first_earner, "Babu");
        assert_eq!(settings.second_earner, "Mamu");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.settlement_currency = Currency::Usd;
        settings.first_earner = "Alex".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_file": "home.csv"}"#).unwrap();
        assert_eq!(settings.default_file, "home.csv");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.settlement_currency, Currency::Gbp);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
