//! What the retrieval controller publishes.

use std::sync::Arc;

use tokio::sync::watch;

use crate::directory::DirectoryError;
use crate::domain::{BikeShareSystem, Station};
use crate::location::LocationError;

/// Where a fetch cycle is.
///
/// `Idle → AwaitingLocation → Fetching → {Success | LocationTimeout |
/// LocationDenied | NetworkFailure}`. The last four are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    /// No cycle has run yet.
    #[default]
    Idle,
    AwaitingLocation,
    Fetching,
    Success,
    LocationTimeout,
    LocationDenied,
    NetworkFailure,
}

impl CyclePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CyclePhase::Success
                | CyclePhase::LocationTimeout
                | CyclePhase::LocationDenied
                | CyclePhase::NetworkFailure
        )
    }
}

/// Snapshot for presentation.
///
/// `stations` only changes on success; failures leave the previous list in
/// place and just clear `is_loading`.
#[derive(Debug, Clone, Default)]
pub struct StationsView {
    pub system: BikeShareSystem,
    pub stations: Vec<Station>,
    pub is_loading: bool,
    pub phase: CyclePhase,
    /// Number of the cycle this snapshot belongs to; 0 before the first.
    pub cycle: u64,
}

/// How a cycle ended.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The sorted list was published.
    Published { count: usize },
    /// No coordinate; nothing was fetched.
    LocationUnavailable(LocationError),
    /// The fetch failed; the previous list was kept.
    NetworkFailure(DirectoryError),
    /// A newer cycle started before this one finished.
    Superseded,
}

/// Publishes on behalf of one cycle, and only while it is the latest.
pub(crate) struct Publisher {
    view: Arc<watch::Sender<StationsView>>,
    cycle: u64,
}

impl Publisher {
    pub(crate) fn new(view: Arc<watch::Sender<StationsView>>, cycle: u64) -> Self {
        Self { view, cycle }
    }

    /// Apply `update` if no newer cycle has started. Returns whether it did.
    pub(crate) fn update(&self, update: impl FnOnce(&mut StationsView)) -> bool {
        self.view.send_if_modified(|view| {
            if view.cycle != self.cycle {
                return false;
            }
            update(view);
            true
        })
    }
}
