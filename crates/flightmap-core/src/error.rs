//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by the route geometry engine.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A waypoint carried a non-finite or out-of-range coordinate.
    #[error("waypoint {ident:?} has a malformed coordinate (lat {lat}, lon {lon})")]
    MalformedCoordinate { ident: String, lat: f64, lon: f64 },
}

/// Errors produced while resolving a filed route against the catalog.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("unknown airport ident {0:?}")]
    UnknownAirport(String),
}

/// Errors produced while loading a navdata catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read navdata file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse navdata: {0}")]
    Parse(#[from] serde_json::Error),
}
