//! Nearby bike-share station client.
//!
//! Answers: "which docks near me have a bike right now?" A location source
//! supplies a coordinate, the directory service fetches stations for the
//! selected bike-share system, and the retrieval controller publishes the
//! distance-sorted list to whatever renders it.

pub mod directory;
pub mod domain;
pub mod http;
pub mod location;
pub mod retrieval;
