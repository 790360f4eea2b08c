pub mod catalog;
pub mod error;
pub mod geo;
pub mod geojson;
pub mod models;
pub mod plan;
pub mod progress;
pub mod route;

pub use catalog::{Airport, Fix, NavCatalog, NavData};
pub use error::{CatalogError, GeometryError, PlanError};
pub use geo::haversine_distance;
pub use geojson::{route_feature_collection, Feature, FeatureCollection, Geometry};
pub use models::{FlightPlan, RouteProgress, RouteSegment, TodMarker, Waypoint};
pub use plan::{extract_route_idents, resolve_route, RoutePlanOptions};
pub use progress::route_progress;
pub use route::{
    locate_top_of_descent, segment_route, split_at_distance, RouteGeometry, TOD_IDENT,
};
