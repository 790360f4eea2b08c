//! Remaining-distance calculation for an in-flight aircraft.

use crate::geo::{haversine_distance, waypoint_distance};
use crate::models::{RouteProgress, Waypoint};

/// Progress of a flight along its route from a current position.
///
/// The remaining distance is the sum of the legs from the nearest waypoint
/// to the destination, plus the off-track distance to that waypoint when
/// the flight is already past the first fix. Returns `None` for routes
/// with fewer than two waypoints or zero total distance.
pub fn route_progress(waypoints: &[Waypoint], lat: f64, lon: f64) -> Option<RouteProgress> {
    if waypoints.len() < 2 {
        return None;
    }

    let mut total_distance_m = 0.0;
    for pair in waypoints.windows(2) {
        total_distance_m += waypoint_distance(&pair[0], &pair[1]);
    }
    if total_distance_m <= 0.0 {
        return None;
    }

    let (nearest_index, nearest_distance_m) = waypoints
        .iter()
        .enumerate()
        .map(|(i, w)| (i, haversine_distance(lat, lon, w.lat, w.lon)))
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    let mut remaining_distance_m = 0.0;
    for pair in waypoints[nearest_index..].windows(2) {
        remaining_distance_m += waypoint_distance(&pair[0], &pair[1]);
    }
    if nearest_index > 0 {
        remaining_distance_m += nearest_distance_m;
    }

    Some(RouteProgress {
        total_distance_m,
        remaining_distance_m,
        remaining_percent: remaining_distance_m / total_distance_m * 100.0,
        nearest_ident: waypoints[nearest_index].ident.clone(),
        nearest_distance_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> Vec<Waypoint> {
        vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 10.0),
            Waypoint::new("C", 0.0, 20.0),
        ]
    }

    #[test]
    fn at_departure_everything_remains() {
        let progress = route_progress(&route(), 0.0, 0.0).expect("progress");
        assert_eq!(progress.nearest_ident, "A");
        assert!((progress.remaining_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn midway_roughly_half_remains() {
        let progress = route_progress(&route(), 0.0, 10.0).expect("progress");
        assert_eq!(progress.nearest_ident, "B");
        assert!((progress.remaining_percent - 50.0).abs() < 0.5);
    }

    #[test]
    fn off_track_distance_counts_toward_remaining() {
        // abeam B, one degree north of track
        let progress = route_progress(&route(), 1.0, 10.0).expect("progress");
        assert_eq!(progress.nearest_ident, "B");
        assert!(progress.nearest_distance_m > 0.0);
        assert!(progress.remaining_percent > 50.0);
    }

    #[test]
    fn degenerate_routes_yield_nothing() {
        assert!(route_progress(&[], 0.0, 0.0).is_none());
        assert!(route_progress(&[Waypoint::new("A", 0.0, 0.0)], 0.0, 0.0).is_none());

        let coincident = vec![Waypoint::new("A", 5.0, 5.0), Waypoint::new("B", 5.0, 5.0)];
        assert!(route_progress(&coincident, 5.0, 5.0).is_none());
    }
}
