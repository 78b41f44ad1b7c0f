//! Permission gate backed by persisted consent plus a first-run prompt.

use inquire::Confirm;
use skycast_core::{Config, LocationConsent, PermissionGate, PermissionOutcome};

/// Maps the stored consent to a gate outcome, prompting once when the user
/// has never been asked. The decision is persisted so later runs skip the
/// prompt; a denied user flips it back via `skycast configure`.
pub struct ConsentGate {
    consent: Option<LocationConsent>,
}

impl ConsentGate {
    pub fn new(consent: Option<LocationConsent>) -> Self {
        Self { consent }
    }

    fn first_run_prompt(&self) -> PermissionOutcome {
        let allowed = Confirm::new("Allow skycast to access your location?")
            .with_default(true)
            .prompt()
            .unwrap_or(false);

        let consent = if allowed { LocationConsent::Granted } else { LocationConsent::Denied };
        if let Err(e) = persist(consent) {
            tracing::warn!("could not persist permission decision: {e}");
        }

        outcome_for(consent)
    }
}

impl PermissionGate for ConsentGate {
    fn request_permissions(&self) -> PermissionOutcome {
        match self.consent {
            Some(consent) => outcome_for(consent),
            None => self.first_run_prompt(),
        }
    }
}

fn outcome_for(consent: LocationConsent) -> PermissionOutcome {
    match consent {
        LocationConsent::Granted => PermissionOutcome::Granted,
        LocationConsent::Denied => PermissionOutcome::RationaleNeeded,
        LocationConsent::Never => PermissionOutcome::PermanentlyDenied,
    }
}

fn persist(consent: LocationConsent) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    config.location_consent = Some(consent);
    config.save()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_consent_maps_to_outcomes() {
        assert_eq!(outcome_for(LocationConsent::Granted), PermissionOutcome::Granted);
        assert_eq!(outcome_for(LocationConsent::Denied), PermissionOutcome::RationaleNeeded);
        assert_eq!(outcome_for(LocationConsent::Never), PermissionOutcome::PermanentlyDenied);
    }

    #[test]
    fn stored_consent_never_prompts() {
        // A gate with any stored decision must resolve without touching
        // stdin; this would hang the test otherwise.
        for consent in [LocationConsent::Granted, LocationConsent::Denied, LocationConsent::Never] {
            let gate = ConsentGate::new(Some(consent));
            assert_eq!(gate.request_permissions(), outcome_for(consent));
        }
    }
}
