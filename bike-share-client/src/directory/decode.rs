//! Station list decoding.

use std::collections::HashSet;

use tracing::warn;

use crate::domain::Station;

/// The body was not a JSON array of well-formed stations.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode station data: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decode a JSON array of stations, keeping wire order.
///
/// A missing or mistyped required field fails the whole array. An
/// unparseable `last_reported` does not; see [`Station::last_reported`].
pub fn decode_stations(body: &[u8]) -> Result<Vec<Station>, DecodeError> {
    let stations: Vec<Station> = serde_json::from_slice(body)?;

    let mut seen = HashSet::with_capacity(stations.len());
    for station in &stations {
        if !seen.insert(station.id.as_str()) {
            warn!(station_id = %station.id, "duplicate station id in response");
        }
    }

    Ok(stations)
}
