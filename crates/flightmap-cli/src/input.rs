//! Plan-file loading.

use anyhow::{Context, Result};
use flightmap_core::Waypoint;
use serde::Deserialize;
use std::path::Path;

/// A plan file is either a bare waypoint array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Bare(Vec<Waypoint>),
    Wrapped { waypoints: Vec<Waypoint> },
}

/// Load a waypoint sequence from a JSON plan file.
pub fn load_waypoints(path: impl AsRef<Path>) -> Result<Vec<Waypoint>> {
    let path = path.as_ref();
    let raw = std::fs::read(path)
        .with_context(|| format!("reading plan file {}", path.display()))?;
    let plan: PlanFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing plan file {}", path.display()))?;
    Ok(match plan {
        PlanFile::Bare(waypoints) => waypoints,
        PlanFile::Wrapped { waypoints } => waypoints,
    })
}
