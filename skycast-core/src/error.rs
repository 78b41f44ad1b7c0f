use thiserror::Error;

/// Everything that can end a workflow run.
///
/// Every variant is terminal for the current run: nothing retries on its
/// own, the user re-triggers via the refresh action or the settings path.
/// Display strings are the exact one-line notices shown to the user.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location is off, please turn it on")]
    LocationDisabled,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location permission denied, please enable it as it is mandatory for the app to work")]
    PermissionPermanentlyDenied,

    #[error("No internet connection available")]
    NoNetwork,

    /// Request never produced a response.
    #[error("Error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("400, Bad Connection")]
    BadRequest,

    #[error("404, Not Found")]
    NotFound,

    /// Any other non-2xx status. The code is kept for logging but the user
    /// notice stays generic.
    #[error("Generic Error")]
    OtherHttp(u16),

    #[error("Failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Location fix failed: {0}")]
    Location(String),

    #[error("Failed to persist weather response: {0}")]
    Cache(String),
}
