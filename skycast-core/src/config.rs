use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Unit system sent to the API. The app always requests metric; unit
/// labelling for display is a separate, locale-driven decision.
pub const METRIC_UNIT: &str = "metric";

/// Storage key for the single-slot response cache.
const WEATHER_RESPONSE_DATA: &str = "weather_response_data.json";

/// Persisted permission decision backing the permission gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationConsent {
    Granted,
    Denied,
    /// "Don't ask again".
    Never,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeatherMap API key.
    pub api_key: Option<String>,

    /// Unit system passed to the API as the `units` query parameter.
    pub units: String,

    /// Location services toggle. When off, no fix is ever requested and the
    /// user is pointed at settings instead.
    pub location_enabled: bool,

    /// Outcome of the last permission prompt, if any. Empty means the user
    /// has not been asked yet.
    pub location_consent: Option<LocationConsent>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            units: METRIC_UNIT.to_string(),
            location_enabled: true,
            location_consent: None,
        }
    }
}

impl Config {
    /// Return the configured API key or a hint pointing at `configure`.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your OpenWeatherMap API key."
            )
        })
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Path of the single-slot weather response cache.
    pub fn cache_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().join(WEATHER_RESPONSE_DATA))
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))
    }
}
