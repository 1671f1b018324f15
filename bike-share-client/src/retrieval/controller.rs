//! The single owner of selection state and fetch cycles.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::directory::DirectoryService;
use crate::domain::{BikeShareSystem, SearchRadius};
use crate::http::Transport;
use crate::location::{LocationSource, LocationWait};

use super::cycle::{CycleInputs, run_cycle};
use super::view::{CycleOutcome, CyclePhase, Publisher, StationsView};

/// Coordinates location and directory lookups and publishes the result.
///
/// Selected system and radius are only changed through `&mut self`, so the
/// controller is their only writer. Observers read through
/// [`RetrievalController::subscribe`].
///
/// Starting a cycle while another is in flight cancels the older one; only
/// the newest cycle ever publishes.
pub struct RetrievalController<L, T> {
    location: Arc<L>,
    directory: DirectoryService<T>,
    radius: SearchRadius,
    wait: LocationWait,
    view: Arc<watch::Sender<StationsView>>,
    cycles_started: u64,
    in_flight: Option<CancellationToken>,
}

impl<L, T> RetrievalController<L, T>
where
    L: LocationSource + 'static,
    T: Transport + 'static,
{
    /// Create an idle controller. The selected system is the directory's.
    pub fn new(location: Arc<L>, directory: DirectoryService<T>) -> Self {
        let (view, _) = watch::channel(StationsView {
            system: directory.system(),
            ..Default::default()
        });

        Self {
            location,
            directory,
            radius: SearchRadius::default(),
            wait: LocationWait::default(),
            view: Arc::new(view),
            cycles_started: 0,
            in_flight: None,
        }
    }

    /// Set the initial radius without starting a cycle.
    pub fn with_radius(mut self, radius: SearchRadius) -> Self {
        self.radius = radius;
        self
    }

    /// Override the location polling policy.
    pub fn with_location_wait(mut self, wait: LocationWait) -> Self {
        self.wait = wait;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<StationsView> {
        self.view.subscribe()
    }

    /// Current snapshot.
    pub fn view(&self) -> StationsView {
        self.view.borrow().clone()
    }

    pub fn system(&self) -> BikeShareSystem {
        self.directory.system()
    }

    pub fn radius(&self) -> SearchRadius {
        self.radius
    }

    /// Start a fetch cycle, cancelling any cycle still in flight.
    pub fn trigger(&mut self) -> JoinHandle<CycleOutcome> {
        self.start_cycle(false)
    }

    /// Claim the view for a new cycle and spawn it.
    ///
    /// The cycle number, system and (optionally) the cleared list are
    /// published together, so no older cycle can write in between.
    fn start_cycle(&mut self, clear_stations: bool) -> JoinHandle<CycleOutcome> {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }

        self.cycles_started += 1;
        let cycle = self.cycles_started;
        let system = self.directory.system();
        self.view.send_modify(|view| {
            view.cycle = cycle;
            view.system = system;
            view.is_loading = true;
            view.phase = CyclePhase::AwaitingLocation;
            if clear_stations {
                view.stations.clear();
            }
        });
        debug!(cycle, %system, radius = self.radius.miles(), "starting fetch cycle");

        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());

        let location = Arc::clone(&self.location);
        let directory = self.directory.clone();
        let radius = self.radius;
        let wait = self.wait.clone();
        let publisher = Publisher::new(Arc::clone(&self.view), cycle);

        tokio::spawn(async move {
            let inputs = CycleInputs {
                location: location.as_ref(),
                directory: &directory,
                radius,
                wait: &wait,
                cancel: &cancel,
            };
            run_cycle(inputs, &publisher).await
        })
    }

    /// Change the radius and fetch again.
    pub fn set_radius(&mut self, radius: SearchRadius) -> JoinHandle<CycleOutcome> {
        self.radius = radius;
        self.trigger()
    }

    /// Switch to another system and fetch its stations.
    ///
    /// Stations from the previous system are dropped from the view. Selecting
    /// the current system again does nothing and returns `None`.
    pub fn select_system(&mut self, system: BikeShareSystem) -> Option<JoinHandle<CycleOutcome>> {
        if system == self.directory.system() {
            return None;
        }

        self.directory = self.directory.for_system(system);
        Some(self.start_cycle(true))
    }
}

impl<L, T> Drop for RetrievalController<L, T> {
    fn drop(&mut self) {
        if let Some(cancel) = self.in_flight.take() {
            cancel.cancel();
        }
    }
}
