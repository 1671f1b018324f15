//! Domain types for the bike-share client.
//!
//! Everything here is a validated value type. Stations are only built by
//! decoding a server response; coordinates and radii enforce their ranges
//! at construction time.

mod coordinate;
mod radius;
mod station;
mod system;
mod timestamp;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use radius::{SearchRadius, UNLIMITED_RADIUS_MILES};
pub use station::Station;
pub use system::{BikeShareSystem, UnknownSystem};
pub use timestamp::{LAST_REPORTED_FORMAT, parse_last_reported};
