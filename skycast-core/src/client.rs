use reqwest::Client;

use crate::error::WeatherError;
use crate::model::{Coordinate, WeatherResponse};

/// Root of the current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Thin client for the current-weather endpoint.
///
/// One GET per call, no retry, no backoff, no coalescing: a second call
/// while one is outstanding is simply a second independent request.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    units: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String, units: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key, units)
    }

    /// Same client against a different endpoint root. Tests point this at a
    /// local mock server.
    pub fn with_base_url(base_url: String, api_key: String, units: String) -> Self {
        Self {
            base_url,
            api_key,
            units,
            http: Client::new(),
        }
    }

    pub async fn current_weather(
        &self,
        coord: &Coordinate,
    ) -> Result<WeatherResponse, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coord.latitude.to_string()),
                ("lon", coord.longitude.to_string()),
                ("units", self.units.clone()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "weather request failed");
            return Err(match status.as_u16() {
                400 => WeatherError::BadRequest,
                404 => WeatherError::NotFound,
                code => WeatherError::OtherHttp(code),
            });
        }

        let body = res.text().await.map_err(WeatherError::Transport)?;
        let parsed: WeatherResponse = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}
