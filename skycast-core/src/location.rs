//! One-shot location fix resolved over an IP-geolocation lookup.
//!
//! The lookup stands in for the platform's positioning service on hosts
//! without one. It resolves once per call and carries its own timeout so a
//! dead endpoint cannot hang the workflow.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::WeatherError;
use crate::model::Coordinate;
use crate::platform::LocationSource;

const GEOLOCATE_URL: &str = "http://ip-api.com/json";
const FIX_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct GeoReply {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Resolves the device position from its public IP address.
#[derive(Debug, Clone)]
pub struct IpLocator {
    url: String,
    enabled: bool,
    http: Client,
}

impl IpLocator {
    pub fn new(enabled: bool) -> Result<Self, WeatherError> {
        Self::with_url(GEOLOCATE_URL.to_string(), enabled)
    }

    /// Same locator against a different lookup endpoint. Tests point this
    /// at a local mock server.
    pub fn with_url(url: String, enabled: bool) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(FIX_TIMEOUT_SECS))
            .build()
            .map_err(|e| WeatherError::Location(e.to_string()))?;

        Ok(Self { url, enabled, http })
    }
}

#[async_trait]
impl LocationSource for IpLocator {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn request_fix(&self) -> Result<Coordinate, WeatherError> {
        let reply = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WeatherError::Location(e.to_string()))?;

        let reply: GeoReply = reply
            .json()
            .await
            .map_err(|e| WeatherError::Location(e.to_string()))?;

        if reply.status != "success" {
            let reason = reply.message.unwrap_or_else(|| "lookup refused".to_string());
            return Err(WeatherError::Location(reason));
        }

        match (reply.lat, reply.lon) {
            (Some(latitude), Some(longitude)) => {
                tracing::info!("location fix: {latitude} {longitude}");
                Ok(Coordinate { latitude, longitude })
            }
            _ => Err(WeatherError::Location("lookup returned no coordinates".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn resolves_a_single_fix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status": "success", "lat": 12.31, "lon": 76.6, "city": "Mysore"}"#,
            ))
            .mount(&server)
            .await;

        let locator = IpLocator::with_url(server.uri(), true).expect("build locator");
        let fix = locator.request_fix().await.expect("fix should resolve");

        assert_eq!(fix.latitude, 12.31);
        assert_eq!(fix.longitude, 76.6);
    }

    #[tokio::test]
    async fn refused_lookup_is_a_location_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status": "fail", "message": "private range"}"#,
            ))
            .mount(&server)
            .await;

        let locator = IpLocator::with_url(server.uri(), true).expect("build locator");
        let err = locator.request_fix().await.unwrap_err();

        assert!(matches!(err, WeatherError::Location(_)));
        assert!(err.to_string().contains("private range"));
    }

    #[tokio::test]
    async fn reply_without_coordinates_is_a_location_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status": "success"}"#))
            .mount(&server)
            .await;

        let locator = IpLocator::with_url(server.uri(), true).expect("build locator");
        let err = locator.request_fix().await.unwrap_err();

        assert!(matches!(err, WeatherError::Location(_)));
    }

    #[test]
    fn enabled_flag_mirrors_the_platform_toggle() {
        assert!(IpLocator::new(true).expect("build").is_enabled());
        assert!(!IpLocator::new(false).expect("build").is_enabled());
    }
}
