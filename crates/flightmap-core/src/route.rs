//! Route geometry engine.
//!
//! Pure, stateless transformation from an ordered waypoint sequence to
//! renderable geometry: antimeridian-safe polyline segments plus an
//! interpolated top-of-descent marker. Invoked once per route refresh;
//! holds no state between invocations.

use crate::error::GeometryError;
use crate::geo::{
    crosses_antimeridian, cumulative_distances, haversine_distance, lerp_coordinate,
    waypoint_distance,
};
use crate::models::{RouteSegment, TodMarker, Waypoint};
use serde::{Deserialize, Serialize};

/// Reserved ident marking the waypoint where descent begins.
pub const TOD_IDENT: &str = "TOD";

/// Segments and descent marker computed for one waypoint sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub segments: Vec<RouteSegment>,
    pub tod: Option<TodMarker>,
    pub total_distance_m: f64,
}

impl RouteGeometry {
    /// Run the full pipeline: validate, segment, locate top of descent.
    pub fn compute(waypoints: &[Waypoint]) -> Result<Self, GeometryError> {
        validate_waypoints(waypoints)?;
        let segments = segment_walk(waypoints);
        let cumulative = cumulative_distances(waypoints, waypoint_distance);
        let total_distance_m = cumulative.last().copied().unwrap_or(0.0);
        let tod = locate_with_cumulative(waypoints, &cumulative);
        Ok(Self {
            segments,
            tod,
            total_distance_m,
        })
    }
}

fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), GeometryError> {
    for waypoint in waypoints {
        let lat_ok = waypoint.lat.is_finite() && (-90.0..=90.0).contains(&waypoint.lat);
        let lon_ok = waypoint.lon.is_finite() && (-180.0..=180.0).contains(&waypoint.lon);
        if !lat_ok || !lon_ok {
            return Err(GeometryError::MalformedCoordinate {
                ident: waypoint.ident.clone(),
                lat: waypoint.lat,
                lon: waypoint.lon,
            });
        }
    }
    Ok(())
}

/// Split a waypoint sequence into polyline segments safe to render.
///
/// When the absolute longitude delta between consecutive waypoints exceeds
/// 180 degrees the leg is inferred to cross the antimeridian and a new
/// segment begins at the next raw waypoint. The crossing point itself is
/// not interpolated to the dateline, so the cut is visually abrupt;
/// concatenating the segments reproduces the input sequence exactly.
///
/// An empty input yields an empty segment list. No segment is ever empty.
pub fn segment_route(waypoints: &[Waypoint]) -> Result<Vec<RouteSegment>, GeometryError> {
    validate_waypoints(waypoints)?;
    Ok(segment_walk(waypoints))
}

fn segment_walk(waypoints: &[Waypoint]) -> Vec<RouteSegment> {
    let Some(first) = waypoints.first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut current = vec![first.coordinate()];
    for pair in waypoints.windows(2) {
        if crosses_antimeridian(pair[0].lon, pair[1].lon) {
            segments.push(RouteSegment {
                coordinates: std::mem::take(&mut current),
            });
        }
        current.push(pair[1].coordinate());
    }
    segments.push(RouteSegment {
        coordinates: current,
    });
    segments
}

/// Locate the top-of-descent marker along a route.
///
/// The descent-start waypoint is found by exact ident match against
/// [`TOD_IDENT`]. Returns `Ok(None)` when no waypoint carries the ident or
/// when the total route distance is zero (single waypoint, or all
/// waypoints coincident); absence is an expected outcome, not an error.
///
/// The marker's coordinate is interpolated inside the cumulative-distance
/// interval containing the flag's along-route distance, so the same
/// fraction can be re-applied against a differently-sampled path.
pub fn locate_top_of_descent<F>(
    waypoints: &[Waypoint],
    distance_fn: F,
) -> Result<Option<TodMarker>, GeometryError>
where
    F: Fn(&Waypoint, &Waypoint) -> f64,
{
    validate_waypoints(waypoints)?;
    let cumulative = cumulative_distances(waypoints, distance_fn);
    Ok(locate_with_cumulative(waypoints, &cumulative))
}

fn locate_with_cumulative(waypoints: &[Waypoint], cumulative: &[f64]) -> Option<TodMarker> {
    let flag_index = waypoints.iter().position(|w| w.ident == TOD_IDENT)?;
    let total = cumulative.last().copied().unwrap_or(0.0);
    if total <= 0.0 {
        return None;
    }

    let distance_m = cumulative[flag_index];
    let [lon, lat] = point_at_distance(waypoints, cumulative, distance_m);
    Some(TodMarker {
        lat,
        lon,
        fraction: distance_m / total,
        distance_m,
    })
}

/// Coordinate at an absolute along-route distance, by linear interpolation
/// between the two waypoints whose cumulative-distance interval contains it.
fn point_at_distance(waypoints: &[Waypoint], cumulative: &[f64], distance_m: f64) -> [f64; 2] {
    if distance_m <= 0.0 {
        return waypoints[0].coordinate();
    }
    for i in 1..waypoints.len() {
        if cumulative[i] >= distance_m {
            let span = cumulative[i] - cumulative[i - 1];
            if span <= 0.0 {
                // coincident pair, nothing to interpolate
                return waypoints[i].coordinate();
            }
            let t = (distance_m - cumulative[i - 1]) / span;
            return lerp_coordinate(waypoints[i - 1].coordinate(), waypoints[i].coordinate(), t);
        }
    }
    waypoints[waypoints.len() - 1].coordinate()
}

/// Partition segmented route geometry at an along-route distance.
///
/// Both halves share the interpolated boundary vertex, matching how the
/// viewer draws the cruise and descent portions as separate line layers.
/// A boundary that falls on an antimeridian cut leg is not interpolated;
/// the partition then happens exactly at the cut. A distance at or beyond
/// the route end leaves the second half empty.
pub fn split_at_distance(
    segments: &[RouteSegment],
    distance_m: f64,
) -> (Vec<RouteSegment>, Vec<RouteSegment>) {
    let mut pre: Vec<RouteSegment> = Vec::new();
    let mut post: Vec<RouteSegment> = Vec::new();
    let mut walked = 0.0;
    let mut split = false;

    for (seg_idx, segment) in segments.iter().enumerate() {
        if seg_idx > 0 {
            // the cut leg between segments still advances along-route distance
            if let (Some(&[lon1, lat1]), Some(&[lon2, lat2])) = (
                segments[seg_idx - 1].coordinates.last(),
                segment.coordinates.first(),
            ) {
                walked += haversine_distance(lat1, lon1, lat2, lon2);
            }
            if !split && walked >= distance_m {
                split = true;
            }
        }
        if split {
            post.push(segment.clone());
            continue;
        }

        match split_segment(&segment.coordinates, &mut walked, distance_m) {
            Some((head, tail)) => {
                pre.push(RouteSegment { coordinates: head });
                post.push(RouteSegment { coordinates: tail });
                split = true;
            }
            None => pre.push(segment.clone()),
        }
    }

    (pre, post)
}

fn split_segment(
    coordinates: &[[f64; 2]],
    walked: &mut f64,
    target: f64,
) -> Option<(Vec<[f64; 2]>, Vec<[f64; 2]>)> {
    for i in 1..coordinates.len() {
        let [lon1, lat1] = coordinates[i - 1];
        let [lon2, lat2] = coordinates[i];
        let leg = haversine_distance(lat1, lon1, lat2, lon2);
        if *walked + leg >= target {
            let t = if leg > 0.0 {
                (target - *walked) / leg
            } else {
                0.0
            };
            let boundary = lerp_coordinate(coordinates[i - 1], coordinates[i], t);
            let mut head = coordinates[..i].to_vec();
            if head.last() != Some(&boundary) {
                head.push(boundary);
            }
            let mut tail = Vec::with_capacity(coordinates.len() - i + 1);
            if boundary != coordinates[i] {
                tail.push(boundary);
            }
            tail.extend_from_slice(&coordinates[i..]);
            return Some((head, tail));
        }
        *walked += leg;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::haversine_distance;

    fn wp(ident: &str, lon: f64, lat: f64) -> Waypoint {
        Waypoint::new(ident, lat, lon)
    }

    #[test]
    fn straight_route_is_one_segment() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("B", 10.0, 0.0), wp("C", 20.0, 0.0)];
        let segments = segment_route(&waypoints).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].coordinates.len(), 3);
    }

    #[test]
    fn antimeridian_crossing_splits_at_the_pair() {
        let waypoints = vec![
            wp("A", 170.0, 10.0),
            wp("B", 179.0, 10.0),
            wp("C", -179.0, 10.0),
            wp("D", -170.0, 10.0),
        ];
        let segments = segment_route(&waypoints).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].coordinates,
            vec![[170.0, 10.0], [179.0, 10.0]]
        );
        assert_eq!(
            segments[1].coordinates,
            vec![[-179.0, 10.0], [-170.0, 10.0]]
        );
    }

    #[test]
    fn concatenated_segments_reproduce_the_input() {
        let waypoints = vec![
            wp("A", 150.0, -5.0),
            wp("B", 179.5, -4.0),
            wp("C", -179.5, -3.0),
            wp("D", -150.0, -2.0),
            wp("E", -120.0, -1.0),
        ];
        let segments = segment_route(&waypoints).unwrap();
        let rejoined: Vec<[f64; 2]> = segments
            .iter()
            .flat_map(|s| s.coordinates.iter().copied())
            .collect();
        let original: Vec<[f64; 2]> = waypoints.iter().map(|w| w.coordinate()).collect();
        assert_eq!(rejoined, original);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn single_waypoint_yields_single_coordinate_segment() {
        let waypoints = vec![wp("TOD", 5.0, 5.0)];
        let segments = segment_route(&waypoints).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].coordinates, vec![[5.0, 5.0]]);

        // total distance is zero, so no marker even though the flag matches
        let tod = locate_top_of_descent(&waypoints, waypoint_distance).unwrap();
        assert!(tod.is_none());
    }

    #[test]
    fn empty_route_is_empty_output() {
        let segments = segment_route(&[]).unwrap();
        assert!(segments.is_empty());
        let tod = locate_top_of_descent(&[], waypoint_distance).unwrap();
        assert!(tod.is_none());
    }

    #[test]
    fn tod_fraction_matches_cumulative_distance() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("TOD", 10.0, 0.0), wp("C", 20.0, 0.0)];
        let tod = locate_top_of_descent(&waypoints, waypoint_distance)
            .unwrap()
            .expect("marker");

        let d_ab = haversine_distance(0.0, 0.0, 0.0, 10.0);
        let d_bc = haversine_distance(0.0, 10.0, 0.0, 20.0);
        let expected = d_ab / (d_ab + d_bc);
        assert!((tod.fraction - expected).abs() < 1e-9);
        assert!((tod.lon - 10.0).abs() < 1e-9);
        assert!((tod.lat - 0.0).abs() < 1e-9);
    }

    #[test]
    fn missing_flag_yields_no_marker() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("B", 10.0, 0.0)];
        let tod = locate_top_of_descent(&waypoints, waypoint_distance).unwrap();
        assert!(tod.is_none());
    }

    #[test]
    fn coincident_waypoints_short_circuit() {
        let waypoints = vec![wp("A", 7.0, 7.0), wp("TOD", 7.0, 7.0), wp("C", 7.0, 7.0)];
        let tod = locate_top_of_descent(&waypoints, waypoint_distance).unwrap();
        assert!(tod.is_none());
    }

    #[test]
    fn flag_on_first_and_last_waypoint() {
        let first = vec![wp("TOD", 0.0, 0.0), wp("B", 10.0, 0.0)];
        let marker = locate_top_of_descent(&first, waypoint_distance)
            .unwrap()
            .expect("marker");
        assert_eq!(marker.fraction, 0.0);
        assert!((marker.lon - 0.0).abs() < 1e-9);

        let last = vec![wp("A", 0.0, 0.0), wp("TOD", 10.0, 0.0)];
        let marker = locate_top_of_descent(&last, waypoint_distance)
            .unwrap()
            .expect("marker");
        assert!((marker.fraction - 1.0).abs() < 1e-9);
        assert!((marker.lon - 10.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_coordinate_is_an_error() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("B", f64::NAN, 0.0)];
        let err = segment_route(&waypoints).unwrap_err();
        assert!(matches!(err, GeometryError::MalformedCoordinate { ref ident, .. } if ident == "B"));

        let waypoints = vec![wp("A", 200.0, 0.0)];
        assert!(segment_route(&waypoints).is_err());
    }

    #[test]
    fn compute_bundles_segments_and_marker() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("TOD", 10.0, 0.0), wp("C", 20.0, 0.0)];
        let geometry = RouteGeometry::compute(&waypoints).unwrap();
        assert_eq!(geometry.segments.len(), 1);
        assert!(geometry.tod.is_some());
        let expected_total = haversine_distance(0.0, 0.0, 0.0, 10.0)
            + haversine_distance(0.0, 10.0, 0.0, 20.0);
        assert!((geometry.total_distance_m - expected_total).abs() < 1e-6);
    }

    #[test]
    fn split_shares_the_boundary_vertex() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("B", 10.0, 0.0), wp("C", 20.0, 0.0)];
        let segments = segment_walk(&waypoints);
        let half = haversine_distance(0.0, 0.0, 0.0, 20.0) / 2.0;
        let (pre, post) = split_at_distance(&segments, half);

        assert_eq!(pre.len(), 1);
        assert_eq!(post.len(), 1);
        let pre_last = *pre[0].coordinates.last().unwrap();
        let post_first = post[0].coordinates[0];
        assert_eq!(pre_last, post_first);
        assert!((pre_last[0] - 10.0).abs() < 0.1);
    }

    #[test]
    fn split_beyond_route_end_leaves_post_empty() {
        let waypoints = vec![wp("A", 0.0, 0.0), wp("B", 10.0, 0.0)];
        let segments = segment_walk(&waypoints);
        let total = haversine_distance(0.0, 0.0, 0.0, 10.0);
        let (pre, post) = split_at_distance(&segments, total * 2.0);
        assert_eq!(pre.len(), 1);
        assert!(post.is_empty());
    }

    #[test]
    fn split_on_a_cut_leg_partitions_at_the_cut() {
        let waypoints = vec![
            wp("A", 170.0, 0.0),
            wp("B", 179.0, 0.0),
            wp("C", -179.0, 0.0),
            wp("D", -170.0, 0.0),
        ];
        let segments = segment_walk(&waypoints);
        // distance that lands inside the B -> C crossing leg
        let to_b = haversine_distance(0.0, 170.0, 0.0, 179.0);
        let crossing = haversine_distance(0.0, 179.0, 0.0, -179.0);
        let (pre, post) = split_at_distance(&segments, to_b + crossing / 2.0);

        assert_eq!(pre.len(), 1);
        assert_eq!(post.len(), 1);
        assert_eq!(pre[0].coordinates, segments[0].coordinates);
        assert_eq!(post[0].coordinates, segments[1].coordinates);
    }
}
