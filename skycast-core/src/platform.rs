//! Seams for the host-platform collaborators: the permission dialog flow,
//! location services, the reachability check, and the busy indicator.
//!
//! The workflow only talks to these traits; binaries plug in whatever the
//! platform offers.

use async_trait::async_trait;

use crate::error::WeatherError;
use crate::model::Coordinate;

/// Outcome of asking the platform for location capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    /// Denied, but an explanation plus a settings path may still change the
    /// user's mind.
    RationaleNeeded,
    /// "Don't ask again". The feature cannot proceed until the user flips
    /// this in settings.
    PermanentlyDenied,
}

pub trait PermissionGate: Send + Sync {
    fn request_permissions(&self) -> PermissionOutcome;
}

/// One-shot high-accuracy location fix.
///
/// Implementations resolve exactly once per call. The underlying platform
/// API may be stream-capable; anything after the first result must be
/// ignored or unsubscribed.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Platform-level location toggle. When off, the caller redirects the
    /// user to settings before any permission prompt.
    fn is_enabled(&self) -> bool;

    async fn request_fix(&self) -> Result<Coordinate, WeatherError>;
}

/// Reachability check consulted before any request is sent.
pub trait NetworkMonitor: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Busy indicator shown for the duration of the network call only.
pub trait ProgressIndicator: Send + Sync {
    fn show(&self);
    fn dismiss(&self);
}

/// Keeps the indicator visible while in scope. Dismissal happens on every
/// exit path, error paths included.
pub struct ProgressGuard<'a> {
    indicator: &'a dyn ProgressIndicator,
}

impl<'a> ProgressGuard<'a> {
    pub fn begin(indicator: &'a dyn ProgressIndicator) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.indicator.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        shown: AtomicUsize,
        dismissed: AtomicUsize,
    }

    impl ProgressIndicator for Counting {
        fn show(&self) {
            self.shown.fetch_add(1, Ordering::SeqCst);
        }

        fn dismiss(&self) {
            self.dismissed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn guard_shows_then_dismisses() {
        let indicator = Counting::default();
        {
            let _busy = ProgressGuard::begin(&indicator);
            assert_eq!(indicator.shown.load(Ordering::SeqCst), 1);
            assert_eq!(indicator.dismissed.load(Ordering::SeqCst), 0);
        }
        assert_eq!(indicator.dismissed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn guard_dismisses_on_unwind_path() {
        let indicator = Counting::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _busy = ProgressGuard::begin(&indicator);
            panic!("fetch failed");
        }));
        assert!(result.is_err());
        assert_eq!(indicator.dismissed.load(Ordering::SeqCst), 1);
    }
}
