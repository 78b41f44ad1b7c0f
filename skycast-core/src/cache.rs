use std::{fs, path::PathBuf};

use crate::config::Config;
use crate::error::WeatherError;
use crate::model::WeatherResponse;

/// Single-slot store for the last successfully decoded response.
///
/// Last write wins. There is no TTL and no schema versioning: content that
/// no longer decodes reads as empty rather than failing the caller.
#[derive(Debug, Clone)]
pub struct WeatherCache {
    path: PathBuf,
}

impl WeatherCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default slot under the platform data directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(Config::cache_file_path()?))
    }

    /// Serialize and write synchronously. Overwrites whatever was stored.
    pub fn save(&self, response: &WeatherResponse) -> Result<(), WeatherError> {
        let json =
            serde_json::to_string(response).map_err(|e| WeatherError::Cache(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| WeatherError::Cache(e.to_string()))?;
        }

        fs::write(&self.path, json).map_err(|e| WeatherError::Cache(e.to_string()))?;
        Ok(())
    }

    /// Reload the slot. Missing, unreadable, and undecodable content all
    /// read as empty.
    pub fn load(&self) -> Option<WeatherResponse> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("weather cache is empty");
                return None;
            }
            Err(e) => {
                tracing::warn!("weather cache unreadable: {e}");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::warn!("stored weather response no longer decodes: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, Metrics, Sys, Wind};
    use tempfile::tempdir;

    fn response(place: &str) -> WeatherResponse {
        WeatherResponse {
            weather: vec![Condition {
                main: "Rain".to_string(),
                description: "light rain".to_string(),
                icon: "10d".to_string(),
            }],
            main: Metrics { temp: 11.2, humidity: 87.0, temp_min: 10.0, temp_max: 12.4 },
            wind: Wind { speed: 5.1 },
            sys: Sys { country: "GB".to_string(), sunrise: 1612251300, sunset: 1612285080 },
            name: place.to_string(),
        }
    }

    fn cache_in(dir: &tempfile::TempDir) -> WeatherCache {
        WeatherCache::new(dir.path().join("weather_response_data.json"))
    }

    #[test]
    fn load_returns_what_save_stored() {
        let dir = tempdir().expect("tempdir");
        let cache = cache_in(&dir);

        let stored = response("London");
        cache.save(&stored).expect("save");

        assert_eq!(cache.load(), Some(stored));
    }

    #[test]
    fn empty_slot_reads_as_none() {
        let dir = tempdir().expect("tempdir");
        assert_eq!(cache_in(&dir).load(), None);
    }

    #[test]
    fn undecodable_content_reads_as_none() {
        let dir = tempdir().expect("tempdir");
        let cache = cache_in(&dir);

        fs::write(dir.path().join("weather_response_data.json"), "{\"schema\": 99}")
            .expect("seed file");

        assert_eq!(cache.load(), None);
    }

    #[test]
    fn second_save_overwrites_first() {
        let dir = tempdir().expect("tempdir");
        let cache = cache_in(&dir);

        cache.save(&response("London")).expect("first save");
        cache.save(&response("Paris")).expect("second save");

        let reloaded = cache.load().expect("slot is occupied");
        assert_eq!(reloaded.name, "Paris");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let cache = WeatherCache::new(dir.path().join("nested/dir/weather_response_data.json"));

        cache.save(&response("Oslo")).expect("save");
        assert_eq!(cache.load().map(|r| r.name), Some("Oslo".to_string()));
    }
}
