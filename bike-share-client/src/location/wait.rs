//! Waiting for a location fix under a deadline.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::Coordinate;

use super::source::{Authorization, LocationSource};

/// Default interval between coordinate checks.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default time allowed for a fix to arrive.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why no coordinate was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// No fix arrived before the deadline.
    #[error("location is not available (no fix within {waited:?})")]
    TimedOut { waited: Duration },

    /// The user or policy refused location access.
    #[error("location access refused ({0:?})")]
    Denied(Authorization),

    /// The wait was abandoned because a newer request superseded it.
    #[error("location wait cancelled")]
    Cancelled,
}

/// Polling policy for [`wait_for_coordinate`].
#[derive(Debug, Clone)]
pub struct LocationWait {
    /// How often to check for a fix.
    pub poll_interval: Duration,
    /// Deadline, measured from the start of the wait.
    pub timeout: Duration,
}

impl LocationWait {
    pub fn new(poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            poll_interval,
            timeout,
        }
    }
}

impl Default for LocationWait {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT)
    }
}

/// Request location and wait for a fix.
///
/// Checks `source` every `poll_interval` until a coordinate appears, the
/// deadline passes, authorization is refused, or `cancel` fires.
pub async fn wait_for_coordinate<L>(
    source: &L,
    policy: &LocationWait,
    cancel: &CancellationToken,
) -> Result<Coordinate, LocationError>
where
    L: LocationSource + ?Sized,
{
    let started = Instant::now();
    let deadline = started + policy.timeout;

    source.request_if_needed();

    loop {
        if let Some(coordinate) = source.current_coordinate() {
            debug!(%coordinate, waited = ?started.elapsed(), "location available");
            return Ok(coordinate);
        }

        let authorization = source.authorization();
        if authorization.is_refused() {
            return Err(LocationError::Denied(authorization));
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(LocationError::TimedOut {
                waited: now - started,
            });
        }

        let wake = (now + policy.poll_interval).min(deadline);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(LocationError::Cancelled),
            _ = sleep_until(wake) => {}
        }
    }
}
