//! Flightmap CLI - command line tools for the route pipeline.
//!
//! Binaries:
//! - route_geometry: compute segments + TOD for a plan file or provider fetch
//! - construct_route: resolve a filed route string against a navdata file

pub mod input;
pub mod report;

pub use input::load_waypoints;
pub use report::geometry_summary;
