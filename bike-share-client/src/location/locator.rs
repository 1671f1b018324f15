//! Single-shot locator over a platform location backend.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::Coordinate;

use super::source::{Authorization, LocationSource};

/// The platform's location service, as seen by [`SingleShotLocator`].
///
/// Implementations forward platform callbacks to the locator's `on_*`
/// methods.
pub trait LocationPlatform: Send + Sync {
    fn authorization_status(&self) -> Authorization;

    /// Show the platform permission prompt.
    fn request_authorization(&self);

    fn start_updates(&self);

    fn stop_updates(&self);
}

#[derive(Debug, Default)]
struct LocatorState {
    fix: Option<Coordinate>,
    authorization: Authorization,
}

/// Location source that stops updating after the first fix.
///
/// No coordinate is available until authorization is granted and at least
/// one fix has arrived.
pub struct SingleShotLocator<P> {
    platform: P,
    state: Mutex<LocatorState>,
}

impl<P: LocationPlatform> SingleShotLocator<P> {
    pub fn new(platform: P) -> Self {
        let authorization = platform.authorization_status();
        Self {
            platform,
            state: Mutex::new(LocatorState {
                fix: None,
                authorization,
            }),
        }
    }

    /// Platform callback: authorization changed.
    pub fn on_authorization_changed(&self, status: Authorization) {
        self.state().authorization = status;
        debug!(?status, "location authorization changed");

        if status.is_authorized() {
            self.platform.start_updates();
        }
    }

    /// Platform callback: new fixes, oldest first.
    pub fn on_locations(&self, fixes: &[Coordinate]) {
        let Some(latest) = fixes.last() else {
            return;
        };
        self.state().fix = Some(*latest);
        debug!(fix = %latest, "location fix received");
        self.platform.stop_updates();
    }

    /// Platform callback: the location service reported an error.
    pub fn on_error(&self, message: &str) {
        warn!(error = message, "location manager failed");
    }

    fn state(&self) -> MutexGuard<'_, LocatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: LocationPlatform> LocationSource for SingleShotLocator<P> {
    fn current_coordinate(&self) -> Option<Coordinate> {
        self.state().fix
    }

    fn request_if_needed(&self) {
        let status = self.platform.authorization_status();
        self.state().authorization = status;

        match status {
            Authorization::NotDetermined => self.platform.request_authorization(),
            Authorization::AuthorizedWhenInUse | Authorization::AuthorizedAlways => {
                self.platform.start_updates()
            }
            Authorization::Restricted | Authorization::Denied => {
                warn!(?status, "location access denied");
            }
        }
    }

    fn authorization(&self) -> Authorization {
        self.state().authorization
    }
}
