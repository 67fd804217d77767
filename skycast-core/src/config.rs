use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::provider::ProviderId;

pub const DEFAULT_CITY: &str = "London";
pub const DEFAULT_LATENCY_MS: u64 = 800;
pub const DEFAULT_LOCATION_LABEL: &str = "Your Location";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "Paris"
/// latency_ms = 300
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// City shown when the dashboard starts.
    pub default_city: Option<String>,

    /// Simulated network delay before a reading is shown.
    pub latency_ms: Option<u64>,

    /// Label searched when the user asks for their current location.
    pub location_label: Option<String>,

    /// Provider short name; only "mock" exists.
    pub provider: Option<String>,
}

impl Config {
    pub fn default_city(&self) -> &str {
        non_blank(self.default_city.as_deref()).unwrap_or(DEFAULT_CITY)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms.unwrap_or(DEFAULT_LATENCY_MS))
    }

    pub fn location_label(&self) -> &str {
        non_blank(self.location_label.as_deref()).unwrap_or(DEFAULT_LOCATION_LABEL)
    }

    /// Return the configured provider as a strongly-typed ProviderId.
    pub fn provider_id(&self) -> Result<ProviderId> {
        match self.provider.as_deref() {
            Some(s) => ProviderId::try_from(s),
            None => Ok(ProviderId::Mock),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::default();

        assert_eq!(cfg.default_city(), "London");
        assert_eq!(cfg.latency(), Duration::from_millis(800));
        assert_eq!(cfg.location_label(), "Your Location");
        assert_eq!(cfg.provider_id().unwrap(), ProviderId::Mock);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = Config {
            default_city: Some("  ".into()),
            location_label: Some(String::new()),
            ..Config::default()
        };

        assert_eq!(cfg.default_city(), "London");
        assert_eq!(cfg.location_label(), "Your Location");
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let cfg = Config { provider: Some("openweather".into()), ..Config::default() };
        let err = cfg.provider_id().unwrap_err();
        assert!(err.to_string().contains("Unknown provider 'openweather'"));
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config {
            default_city: Some("Tokyo".into()),
            latency_ms: Some(0),
            ..Config::default()
        };

        cfg.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, cfg);
        assert_eq!(loaded.latency(), Duration::ZERO);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "latency_ms = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
