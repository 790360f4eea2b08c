//! Core data models for the flightmap service.

use serde::{Deserialize, Serialize};

/// A named geographic point in a flight route.
///
/// Coordinates are structured numeric fields end to end; anything that
/// arrives as a string is rejected at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub ident: String,
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    pub fn new(ident: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            ident: ident.into(),
            lat,
            lon,
        }
    }

    /// Coordinate pair in GeoJSON order.
    pub fn coordinate(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// A filed flight plan as received from an operator or network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlan {
    #[serde(default)]
    pub callsign: Option<String>,
    /// Departure airport ident (ICAO)
    pub departure: String,
    /// Arrival airport ident (ICAO)
    pub arrival: String,
    /// Filed route string, whitespace-separated fix idents
    pub route: String,
}

/// One continuous polyline that does not cross the antimeridian.
///
/// Coordinates are `[lon, lat]` pairs in flight-plan order. A segment is
/// never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteSegment {
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Interpolated top-of-descent point along a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodMarker {
    pub lat: f64,
    pub lon: f64,
    /// Position along total route distance, in [0, 1]
    pub fraction: f64,
    /// Absolute distance from the first waypoint, in meters
    pub distance_m: f64,
}

/// Progress of a flight along its resolved route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteProgress {
    pub total_distance_m: f64,
    pub remaining_distance_m: f64,
    pub remaining_percent: f64,
    /// Ident of the waypoint closest to the current position
    pub nearest_ident: String,
    /// Off-track distance to that waypoint, in meters
    pub nearest_distance_m: f64,
}
