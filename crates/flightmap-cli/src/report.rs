//! Text summaries for terminal output.

use flightmap_core::{RouteGeometry, Waypoint};
use std::fmt::Write;

/// Render a one-screen summary of computed route geometry.
pub fn geometry_summary(waypoints: &[Waypoint], geometry: &RouteGeometry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} waypoints, {:.1} km total",
        waypoints.len(),
        geometry.total_distance_m / 1000.0
    );

    for (index, segment) in geometry.segments.iter().enumerate() {
        let first = segment.coordinates.first();
        let last = segment.coordinates.last();
        if let (Some(first), Some(last)) = (first, last) {
            let _ = writeln!(
                out,
                "  segment {}: {} points, [{:.3}, {:.3}] -> [{:.3}, {:.3}]",
                index,
                segment.len(),
                first[0],
                first[1],
                last[0],
                last[1]
            );
        }
    }

    match &geometry.tod {
        Some(tod) => {
            let _ = writeln!(
                out,
                "  TOD at {:.1}% ({:.4}, {:.4})",
                tod.fraction * 100.0,
                tod.lat,
                tod.lon
            );
        }
        None => {
            let _ = writeln!(out, "  no TOD waypoint in plan");
        }
    }

    out
}
