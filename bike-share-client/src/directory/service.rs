//! Station lookups for one bike-share system.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{BikeShareSystem, Coordinate, Station};
use crate::http::Transport;

use super::decode::decode_stations;
use super::endpoints::{Endpoints, endpoints_for};
use super::error::DirectoryError;

/// Fetches and decodes stations for a selected system.
///
/// The system is fixed at construction; use [`DirectoryService::for_system`]
/// to get a service for another one over the same transport.
pub struct DirectoryService<T> {
    transport: Arc<T>,
    system: BikeShareSystem,
    endpoints: Endpoints,
}

impl<T> Clone for DirectoryService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            system: self.system,
            endpoints: self.endpoints,
        }
    }
}

impl<T: Transport> DirectoryService<T> {
    pub fn new(transport: Arc<T>, system: BikeShareSystem) -> Self {
        Self {
            transport,
            system,
            endpoints: endpoints_for(system),
        }
    }

    /// A service for `system` sharing this service's transport.
    pub fn for_system(&self, system: BikeShareSystem) -> Self {
        Self::new(Arc::clone(&self.transport), system)
    }

    pub fn system(&self) -> BikeShareSystem {
        self.system
    }

    /// Every station in the system, in server order.
    pub async fn fetch_all_stations(&self) -> Result<Vec<Station>, DirectoryError> {
        let body = self.transport.get_raw(self.endpoints.stations, &[]).await?;
        let stations = decode_stations(&body)?;

        debug!(system = %self.system, count = stations.len(), "fetched all stations");
        Ok(stations)
    }

    /// Stations within `radius_miles` of `at`, closest first.
    ///
    /// Stations the server returned without a distance come last. Ties keep
    /// server order.
    pub async fn fetch_nearby_stations(
        &self,
        at: Coordinate,
        radius_miles: f64,
    ) -> Result<Vec<Station>, DirectoryError> {
        let query = [
            ("lat", at.latitude().to_string()),
            ("lon", at.longitude().to_string()),
            ("radius", radius_miles.to_string()),
        ];

        let body = self
            .transport
            .get_raw(self.endpoints.nearby_stations, &query)
            .await?;
        let mut stations = decode_stations(&body)?;
        sort_by_distance(&mut stations);

        debug!(
            system = %self.system,
            %at,
            radius_miles,
            count = stations.len(),
            "fetched nearby stations"
        );
        Ok(stations)
    }
}

/// Stable sort by ascending distance, with unknown distances last.
pub fn sort_by_distance(stations: &mut [Station]) {
    stations.sort_by(|a, b| compare_distance(a.distance, b.distance));
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
