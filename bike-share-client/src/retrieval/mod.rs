//! Retrieval pipeline: wait for a location, fetch nearby stations, publish.
//!
//! [`RetrievalController`] owns the selected system and radius. Every
//! trigger starts a numbered cycle; starting a new one cancels the previous,
//! and a cycle only writes to the view while its number is current.

mod controller;
mod cycle;
mod view;

pub use controller::RetrievalController;
pub use view::{CycleOutcome, CyclePhase, StationsView};
