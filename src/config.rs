use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::SlotBonuses;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSettings {
    /// Location of the JSON data document; platform data dir when unset.
    pub path: Option<PathBuf>,
}

impl StorageSettings {
    /// Resolve the effective data file path.
    pub fn data_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("partner-match")
                .join("data.json")
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub bonuses: BonusConfig,
}

/// Availability bonus points, overridable per tier
#[derive(Debug, Clone, Deserialize)]
pub struct BonusConfig {
    #[serde(default = "default_exact_bonus")]
    pub exact: f64,
    #[serde(default = "default_same_day_bonus")]
    pub same_day: f64,
    #[serde(default = "default_same_month_bonus")]
    pub same_month: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            exact: default_exact_bonus(),
            same_day: default_same_day_bonus(),
            same_month: default_same_month_bonus(),
        }
    }
}

fn default_exact_bonus() -> f64 {
    25.0
}
fn default_same_day_bonus() -> f64 {
    15.0
}
fn default_same_month_bonus() -> f64 {
    5.0
}

impl From<BonusConfig> for SlotBonuses {
    fn from(value: BonusConfig) -> Self {
        Self {
            exact: value.exact,
            same_day: value.same_day,
            same_month: value.same_month,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with PARTNER__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g. PARTNER__STORAGE__PATH -> storage.path
            .add_source(
                Environment::with_prefix("PARTNER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PARTNER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
