//! Core library for the `skycast` weather app.
//!
//! This crate defines:
//! - Configuration handling (API key, units, location settings)
//! - The domain model and error taxonomy
//! - Seams for the platform collaborators (permissions, location,
//!   connectivity, busy indicator)
//! - The current-weather client, the single-slot response cache, the
//!   display presenter, and the workflow that ties them together
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod platform;
pub mod present;
pub mod workflow;

pub use cache::WeatherCache;
pub use client::WeatherClient;
pub use config::{Config, LocationConsent, METRIC_UNIT};
pub use error::WeatherError;
pub use location::IpLocator;
pub use model::{Condition, Coordinate, Metrics, Sys, WeatherResponse, Wind};
pub use platform::{
    LocationSource, NetworkMonitor, PermissionGate, PermissionOutcome, ProgressGuard,
    ProgressIndicator,
};
pub use present::{DisplayFields, RenderContext, WeatherIcon, render, temperature_unit};
pub use workflow::WeatherFlow;
