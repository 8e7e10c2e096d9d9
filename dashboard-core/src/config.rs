use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::model::DisplayUnit;

pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOCATION_LABEL: &str = "Current Location";

/// Settings for the weather data provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Fixed RNG seed for reproducible mock data.
    pub seed: Option<u64>,
}

/// Where "use my location" gets its position from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// `false` behaves like a refused permission prompt.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn default_enabled() -> bool {
    true
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_unit = "imperial"
/// search_delay_ms = 500
///
/// [geolocation]
/// latitude = 48.85
/// longitude = 2.35
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_unit: DisplayUnit,

    /// Artificial latency before a search result appears.
    pub search_delay_ms: u64,

    /// Location name used for weather looked up by position.
    pub current_location_label: String,

    pub provider: ProviderConfig,

    /// Absent means the device has no geolocation capability.
    pub geolocation: Option<GeolocationConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_unit: DisplayUnit::default(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            current_location_label: DEFAULT_LOCATION_LABEL.to_string(),
            provider: ProviderConfig::default(),
            geolocation: None,
        }
    }
}

impl Config {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn set_default_unit(&mut self, unit: DisplayUnit) {
        self.default_unit = unit;
    }

    /// Set fixed coordinates, enabling geolocation if it was unset.
    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        let geo = self.geolocation.get_or_insert(GeolocationConfig {
            enabled: true,
            latitude: None,
            longitude: None,
        });
        geo.latitude = Some(latitude);
        geo.longitude = Some(longitude);
    }

    pub fn set_geolocation_enabled(&mut self, enabled: bool) {
        match self.geolocation.as_mut() {
            Some(geo) => geo.enabled = enabled,
            None => {
                self.geolocation = Some(GeolocationConfig {
                    enabled,
                    latitude: None,
                    longitude: None,
                })
            }
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
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
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.search_delay(), Duration::from_secs(1));
        assert_eq!(cfg.current_location_label, "Current Location");
        assert!(cfg.geolocation.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_unit = \"imperial\"\n\n[geolocation]\nlatitude = 1.5\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_unit, DisplayUnit::Imperial);
        assert_eq!(cfg.search_delay_ms, DEFAULT_SEARCH_DELAY_MS);

        let geo = cfg.geolocation.expect("geolocation section");
        assert!(geo.enabled);
        assert_eq!(geo.latitude, Some(1.5));
        assert_eq!(geo.longitude, None);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_default_unit(DisplayUnit::Imperial);
        cfg.set_coordinates(35.68, 139.69);
        cfg.provider.seed = Some(5);
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_unit = \"kelvin\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn disabling_geolocation_keeps_coordinates() {
        let mut cfg = Config::default();
        cfg.set_coordinates(1.0, 2.0);
        cfg.set_geolocation_enabled(false);

        let geo = cfg.geolocation.unwrap();
        assert!(!geo.enabled);
        assert_eq!(geo.latitude, Some(1.0));
    }
}
