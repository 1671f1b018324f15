//! Bike-share directory: which stations exist, and which are nearby.
//!
//! Resolves logical lookups to endpoint paths for the selected
//! [`BikeShareSystem`](crate::domain::BikeShareSystem), fetches them through a
//! [`Transport`](crate::http::Transport), decodes the station array and, for
//! nearby lookups, sorts by distance.

mod decode;
mod endpoints;
mod error;
mod service;

pub use decode::{DecodeError, decode_stations};
pub use endpoints::{Endpoints, endpoints_for};
pub use error::{DirectoryError, FetchFailure};
pub use service::{DirectoryService, sort_by_distance};
