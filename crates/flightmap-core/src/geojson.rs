//! GeoJSON output for the map renderer.
//!
//! The viewer draws the route as LineString layers (split at the top of
//! descent so cruise and descent can be styled differently) and each
//! waypoint as a Point marker carrying its ident.

use crate::models::{RouteSegment, Waypoint};
use crate::route::{split_at_distance, RouteGeometry, TOD_IDENT};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
    Point { coordinates: [f64; 2] },
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    pub geometry: Geometry,
    pub properties: Value,
}

impl Feature {
    pub fn line(coordinates: Vec<[f64; 2]>, properties: Value) -> Self {
        Self {
            feature_type: "Feature",
            geometry: Geometry::LineString { coordinates },
            properties,
        }
    }

    pub fn point(coordinates: [f64; 2], properties: Value) -> Self {
        Self {
            feature_type: "Feature",
            geometry: Geometry::Point { coordinates },
            properties,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: "FeatureCollection",
            features,
        }
    }
}

/// Build the render payload for a computed route.
///
/// With a top of descent present, the line features are partitioned at the
/// interpolated marker into `"cruise"` and `"descent"` phases that share
/// the boundary vertex; without one, each antimeridian-safe segment becomes
/// a single un-phased feature.
pub fn route_feature_collection(
    waypoints: &[Waypoint],
    geometry: &RouteGeometry,
) -> FeatureCollection {
    let mut features = Vec::new();

    match &geometry.tod {
        Some(tod) => {
            let (cruise, descent) = split_at_distance(&geometry.segments, tod.distance_m);
            features.extend(phase_lines(cruise, "cruise"));
            features.extend(phase_lines(descent, "descent"));
        }
        None => {
            for (index, segment) in geometry.segments.iter().enumerate() {
                features.push(Feature::line(
                    segment.coordinates.clone(),
                    json!({ "segment": index }),
                ));
            }
        }
    }

    for waypoint in waypoints {
        features.push(Feature::point(
            waypoint.coordinate(),
            json!({ "ident": waypoint.ident }),
        ));
    }

    if let Some(tod) = &geometry.tod {
        features.push(Feature::point(
            [tod.lon, tod.lat],
            json!({
                "ident": TOD_IDENT,
                "fraction": tod.fraction,
                "distance_m": tod.distance_m,
            }),
        ));
    }

    FeatureCollection::new(features)
}

fn phase_lines(segments: Vec<RouteSegment>, phase: &str) -> Vec<Feature> {
    segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            Feature::line(
                segment.coordinates,
                json!({ "segment": index, "phase": phase }),
            )
        })
        .collect()
}
