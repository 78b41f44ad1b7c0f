//! The retrieval workflow: platform checks, one-shot fix, fetch, cache.

use crate::cache::WeatherCache;
use crate::client::WeatherClient;
use crate::error::WeatherError;
use crate::model::{Coordinate, WeatherResponse};
use crate::platform::{
    LocationSource, NetworkMonitor, PermissionGate, PermissionOutcome, ProgressGuard,
    ProgressIndicator,
};

/// Owns the collaborators and runs the fetch-and-store sequence.
///
/// A run is a single logical thread of control with three suspension points
/// (permission, fix, fetch), each resolved exactly once. Nothing here
/// retries, coalesces, or cancels; overlapping runs are independent.
pub struct WeatherFlow {
    gate: Box<dyn PermissionGate>,
    locations: Box<dyn LocationSource>,
    network: Box<dyn NetworkMonitor>,
    progress: Box<dyn ProgressIndicator>,
    client: WeatherClient,
    cache: WeatherCache,
}

impl WeatherFlow {
    pub fn new(
        gate: Box<dyn PermissionGate>,
        locations: Box<dyn LocationSource>,
        network: Box<dyn NetworkMonitor>,
        progress: Box<dyn ProgressIndicator>,
        client: WeatherClient,
        cache: WeatherCache,
    ) -> Self {
        Self { gate, locations, network, progress, client, cache }
    }

    /// Last stored response, if any. Display reads this first, always,
    /// before any network activity; an empty slot is not an error.
    pub fn cached(&self) -> Option<WeatherResponse> {
        self.cache.load()
    }

    /// The full sequence from the platform checks onward.
    pub async fn run(&self) -> Result<WeatherResponse, WeatherError> {
        if !self.locations.is_enabled() {
            return Err(WeatherError::LocationDisabled);
        }

        match self.gate.request_permissions() {
            PermissionOutcome::Granted => {}
            PermissionOutcome::RationaleNeeded => return Err(WeatherError::PermissionDenied),
            PermissionOutcome::PermanentlyDenied => {
                return Err(WeatherError::PermissionPermanentlyDenied);
            }
        }

        self.refresh().await
    }

    /// The manual refresh action re-enters here: new fix, new fetch, the
    /// permission state untouched.
    pub async fn refresh(&self) -> Result<WeatherResponse, WeatherError> {
        let coord = self.locations.request_fix().await?;
        self.fetch(coord).await
    }

    async fn fetch(&self, coord: Coordinate) -> Result<WeatherResponse, WeatherError> {
        if !self.network.is_online() {
            return Err(WeatherError::NoNetwork);
        }

        // Indicator covers the network call only and drops on every exit
        // path before the result propagates.
        let fetched = {
            let _busy = ProgressGuard::begin(self.progress.as_ref());
            self.client.current_weather(&coord).await
        };

        let response = fetched?;
        self.cache.save(&response)?;
        tracing::info!(place = %response.name, "stored fresh weather response");

        Ok(response)
    }
}
