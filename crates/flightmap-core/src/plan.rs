//! Filed-route resolution against the navdata catalog.

use crate::catalog::NavCatalog;
use crate::error::PlanError;
use crate::geo::haversine_distance;
use crate::models::Waypoint;
use serde::{Deserialize, Serialize};

/// Tuning for route resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlanOptions {
    /// Maximum accepted leg length. A same-named fix resolved to the wrong
    /// hemisphere produces an absurd leg; anything longer than this is
    /// treated as a mis-resolution and dropped.
    pub max_leg_distance_m: f64,
}

impl Default for RoutePlanOptions {
    fn default() -> Self {
        Self {
            max_leg_distance_m: 1_000_000.0,
        }
    }
}

/// Extract fix idents from a filed route string.
///
/// Route strings are whitespace-separated; airway and SID/STAR tokens that
/// don't resolve in the catalog are simply skipped downstream.
pub fn extract_route_idents(route: &str) -> Vec<&str> {
    route.split_whitespace().collect()
}

/// Resolve a filed route into an ordered waypoint sequence.
///
/// The departure airport comes first and the arrival airport last; both
/// must exist in the catalog. Each route token is matched against the
/// catalog, picking the same-named fix nearest to the previously accepted
/// point, and dropped when the resulting leg exceeds
/// [`RoutePlanOptions::max_leg_distance_m`]. Unknown tokens are skipped.
pub fn resolve_route(
    catalog: &NavCatalog,
    departure: &str,
    arrival: &str,
    route: &str,
    options: &RoutePlanOptions,
) -> Result<Vec<Waypoint>, PlanError> {
    let departure_airport = catalog
        .airport(departure)
        .ok_or_else(|| PlanError::UnknownAirport(departure.to_string()))?;
    let arrival_airport = catalog
        .airport(arrival)
        .ok_or_else(|| PlanError::UnknownAirport(arrival.to_string()))?;

    let mut waypoints = vec![Waypoint::new(
        departure_airport.ident.clone(),
        departure_airport.lat,
        departure_airport.lon,
    )];

    for ident in extract_route_idents(route) {
        let previous = &waypoints[waypoints.len() - 1];
        let Some(fix) = catalog.nearest_fix(ident, previous.lat, previous.lon) else {
            continue;
        };
        let leg = haversine_distance(previous.lat, previous.lon, fix.lat, fix.lon);
        if leg <= options.max_leg_distance_m {
            waypoints.push(Waypoint::new(fix.ident.clone(), fix.lat, fix.lon));
        }
    }

    waypoints.push(Waypoint::new(
        arrival_airport.ident.clone(),
        arrival_airport.lat,
        arrival_airport.lon,
    ));

    Ok(waypoints)
}
