//! One fetch cycle: locate, fetch, publish.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::directory::DirectoryService;
use crate::domain::SearchRadius;
use crate::http::Transport;
use crate::location::{LocationError, LocationSource, LocationWait, wait_for_coordinate};

use super::view::{CycleOutcome, CyclePhase, Publisher};

/// Everything a cycle needs, captured when it was triggered.
pub(crate) struct CycleInputs<'a, L: ?Sized, T> {
    pub location: &'a L,
    pub directory: &'a DirectoryService<T>,
    pub radius: SearchRadius,
    pub wait: &'a LocationWait,
    pub cancel: &'a CancellationToken,
}

pub(crate) async fn run_cycle<L, T>(
    inputs: CycleInputs<'_, L, T>,
    publisher: &Publisher,
) -> CycleOutcome
where
    L: LocationSource + ?Sized,
    T: Transport,
{
    let CycleInputs {
        location,
        directory,
        radius,
        wait,
        cancel,
    } = inputs;

    publisher.update(|view| {
        view.is_loading = true;
        view.phase = CyclePhase::AwaitingLocation;
    });

    let coordinate = match wait_for_coordinate(location, wait, cancel).await {
        Ok(coordinate) => coordinate,
        Err(LocationError::Cancelled) => return CycleOutcome::Superseded,
        Err(err) => {
            let phase = match &err {
                LocationError::Denied(_) => CyclePhase::LocationDenied,
                _ => CyclePhase::LocationTimeout,
            };
            let published = publisher.update(|view| {
                view.is_loading = false;
                view.phase = phase;
            });
            if !published {
                return CycleOutcome::Superseded;
            }
            warn!(error = %err, "no location, skipping fetch");
            return CycleOutcome::LocationUnavailable(err);
        }
    };

    publisher.update(|view| view.phase = CyclePhase::Fetching);

    let radius_miles = radius.wire_miles();
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => return CycleOutcome::Superseded,
        result = directory.fetch_nearby_stations(coordinate, radius_miles) => result,
    };

    match result {
        Ok(stations) => {
            let count = stations.len();
            let published = publisher.update(|view| {
                view.stations = stations;
                view.is_loading = false;
                view.phase = CyclePhase::Success;
            });
            if published {
                debug!(system = %directory.system(), count, "published stations");
                CycleOutcome::Published { count }
            } else {
                CycleOutcome::Superseded
            }
        }
        Err(err) => {
            let published = publisher.update(|view| {
                view.is_loading = false;
                view.phase = CyclePhase::NetworkFailure;
            });
            if !published {
                return CycleOutcome::Superseded;
            }
            error!(system = %directory.system(), error = %err, "station fetch failed");
            CycleOutcome::NetworkFailure(err)
        }
    }
}
