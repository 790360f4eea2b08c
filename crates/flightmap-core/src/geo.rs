//! Spherical geometry for route distance calculations.

use crate::models::Waypoint;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using the Haversine formula.
///
/// This is the standard formula for calculating great-circle distance
/// between two points on a sphere given their latitudes and longitudes.
/// Inputs are decimal degrees; the result is undefined for out-of-range
/// coordinates (callers validate before walking a route).
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two waypoints in meters.
pub fn waypoint_distance(a: &Waypoint, b: &Waypoint) -> f64 {
    haversine_distance(a.lat, a.lon, b.lat, b.lon)
}

/// Cumulative distance at each waypoint, in meters.
///
/// The first entry is always 0; the last entry is the total route distance.
/// Returns one entry per waypoint (a single-waypoint route has total 0).
pub fn cumulative_distances<F>(waypoints: &[Waypoint], distance_fn: F) -> Vec<f64>
where
    F: Fn(&Waypoint, &Waypoint) -> f64,
{
    let mut cumulative = Vec::with_capacity(waypoints.len());
    let mut total = 0.0;
    for (i, waypoint) in waypoints.iter().enumerate() {
        if i > 0 {
            total += distance_fn(&waypoints[i - 1], waypoint);
        }
        cumulative.push(total);
    }
    cumulative
}

/// Linear interpolation between two coordinates at ratio `t` in [0, 1].
///
/// Route legs are short enough on the map that linear lat/lon blending is
/// indistinguishable from the geodesic at render scale.
pub fn lerp_coordinate(from: [f64; 2], to: [f64; 2], t: f64) -> [f64; 2] {
    let t = t.clamp(0.0, 1.0);
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
    ]
}

/// Whether a leg between two longitudes would be drawn the "long way around"
/// by a renderer, i.e. the absolute longitude delta exceeds 180 degrees.
pub fn crosses_antimeridian(lon1: f64, lon2: f64) -> bool {
    (lon2 - lon1).abs() > 180.0
}
