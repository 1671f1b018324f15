//! Endpoint paths per bike-share system.

use crate::domain::BikeShareSystem;

/// Paths for one system's station endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// Every station in the system.
    pub stations: &'static str,
    /// Stations within a radius of a point.
    pub nearby_stations: &'static str,
}

/// One entry per [`BikeShareSystem`], in declaration order.
const TABLE: [(BikeShareSystem, Endpoints); 5] = [
    (
        BikeShareSystem::Baywheels,
        Endpoints {
            stations: "/api/v1/baywheels/stations",
            nearby_stations: "/api/v1/baywheels/stations/nearby",
        },
    ),
    (
        BikeShareSystem::Biketown,
        Endpoints {
            stations: "/api/v1/biketown/stations",
            nearby_stations: "/api/v1/biketown/stations/nearby",
        },
    ),
    (
        BikeShareSystem::Citibike,
        Endpoints {
            stations: "/api/v1/citibike/stations",
            nearby_stations: "/api/v1/citibike/stations/nearby",
        },
    ),
    (
        BikeShareSystem::Divvy,
        Endpoints {
            stations: "/api/v1/divvy/stations",
            nearby_stations: "/api/v1/divvy/stations/nearby",
        },
    ),
    (
        BikeShareSystem::Bluebikes,
        Endpoints {
            stations: "/api/v1/bluebikes/stations",
            nearby_stations: "/api/v1/bluebikes/stations/nearby",
        },
    ),
];

/// Look up the endpoint paths for `system`.
pub fn endpoints_for(system: BikeShareSystem) -> Endpoints {
    // TABLE is in declaration order, so the discriminant is the index.
    TABLE[system as usize].1
}
