//! ffcal configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CURRENCY, DEFAULT_FETCH_TIMEOUT, DEFAULT_REFRESH_INTERVAL,
    DEFAULT_USER_AGENT,
};
use crate::error::{FfcalError, FfcalResult};

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_refresh_interval() -> String {
    DEFAULT_REFRESH_INTERVAL.to_string()
}

fn default_fetch_timeout() -> String {
    DEFAULT_FETCH_TIMEOUT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Configuration at ~/.config/ffcal/config.toml
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FfcalConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// humantime duration, e.g. "8h" or "30m"
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub icons: IconConfig,
}

/// Glyph overrides for the impact icons.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct IconConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

impl Default for FfcalConfig {
    fn default() -> Self {
        FfcalConfig {
            currency: default_currency(),
            base_url: default_base_url(),
            refresh_interval: default_refresh_interval(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
            icons: IconConfig::default(),
        }
    }
}

impl FfcalConfig {
    pub fn config_path() -> FfcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FfcalError::Config("Could not determine config directory".into()))?
            .join("ffcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, writing a commented-out default first if none exists.
    pub fn load() -> FfcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> FfcalResult<Self> {
        Self::build(Config::builder().add_source(File::from(path).required(false)))
    }

    /// Parse config from a TOML string.
    pub fn parse(contents: &str) -> FfcalResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(contents, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> FfcalResult<Self> {
        let config: FfcalConfig = builder
            .build()
            .map_err(|e| FfcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FfcalError::Config(e.to_string()))?;

        // Fail early on bad durations rather than on the first refresh.
        config.refresh_interval()?;
        config.fetch_timeout()?;

        Ok(config)
    }

    pub fn refresh_interval(&self) -> FfcalResult<Duration> {
        parse_positive_duration("refresh_interval", &self.refresh_interval)
    }

    pub fn fetch_timeout(&self) -> FfcalResult<Duration> {
        parse_positive_duration("fetch_timeout", &self.fetch_timeout)
    }

    /// Effective configuration as TOML, for display.
    pub fn to_toml(&self) -> FfcalResult<String> {
        toml::to_string_pretty(self).map_err(|e| FfcalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FfcalResult<()> {
        let contents = format!(
            "\
# ffcal configuration

# Currency whose events are shown:
# currency = \"{DEFAULT_CURRENCY}\"

# Calendar page (the day is passed as ?day=oct19.2026):
# base_url = \"{DEFAULT_BASE_URL}\"

# How often `ffcal watch` refreshes the selected day:
# refresh_interval = \"{DEFAULT_REFRESH_INTERVAL}\"

# Give up on the calendar page after:
# fetch_timeout = \"{DEFAULT_FETCH_TIMEOUT}\"

# Impact icons:
# [icons]
# high = \"■\"
# medium = \"■\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;

        Ok(())
    }
}

fn parse_positive_duration(key: &str, value: &str) -> FfcalResult<Duration> {
    let duration = humantime::parse_duration(value)
        .map_err(|e| FfcalError::Config(format!("Invalid {key} '{value}': {e}")))?;

    if duration.is_zero() {
        return Err(FfcalError::Config(format!("{key} must be greater than zero")));
    }

    Ok(duration)
}
