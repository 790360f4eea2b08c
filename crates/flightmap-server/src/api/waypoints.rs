//! Waypoint catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;

/// List all catalog fixes, de-duplicated by ident.
pub async fn list_waypoints(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let fixes = state.catalog.unique_fixes();
    Json(json!({ "waypoints": fixes }))
}

#[derive(Debug, Deserialize)]
pub struct NearQuery {
    #[serde(default)]
    lat: Option<String>,
    #[serde(default)]
    lon: Option<String>,
}

/// Parse an optional reference coordinate. Map clients sometimes send the
/// literal string "undefined" before the viewport is ready; that and a
/// missing value fall back to 0, anything else unparsable is a client error.
fn parse_reference(value: Option<&str>) -> Result<f64, ()> {
    match value {
        None | Some("undefined") => Ok(0.0),
        Some(raw) => raw.parse().map_err(|_| ()),
    }
}

/// Look up the fix with a given name closest to a reference position.
pub async fn waypoint_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<NearQuery>,
) -> impl IntoResponse {
    let (Ok(ref_lat), Ok(ref_lon)) = (
        parse_reference(query.lat.as_deref()),
        parse_reference(query.lon.as_deref()),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid latitude or longitude" })),
        );
    };

    match state.catalog.nearest_fix(&name, ref_lat, ref_lon) {
        Some(fix) => (
            StatusCode::OK,
            Json(json!({
                "ident": fix.ident,
                "lat": fix.lat,
                "lon": fix.lon,
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Waypoint not found" })),
        ),
    }
}
