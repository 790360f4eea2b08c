//! Route geometry, construction and progress endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::state::AppState;
use flightmap_core::{
    progress, resolve_route, route_feature_collection, FlightPlan, PlanError, RouteGeometry,
    Waypoint,
};

#[derive(Debug, Deserialize)]
pub struct GeometryRequest {
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub waypoints: Vec<Waypoint>,
    pub lat: f64,
    pub lon: f64,
}

fn geometry_payload(waypoints: &[Waypoint], geometry: &RouteGeometry) -> Value {
    json!({
        "waypoints": waypoints,
        "geometry": geometry,
        "geojson": route_feature_collection(waypoints, geometry),
    })
}

/// Compute renderable geometry for a waypoint sequence.
pub async fn route_geometry(Json(request): Json<GeometryRequest>) -> impl IntoResponse {
    match RouteGeometry::compute(&request.waypoints) {
        Ok(geometry) => (
            StatusCode::OK,
            Json(geometry_payload(&request.waypoints, &geometry)),
        ),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

/// Resolve a filed flight plan against the catalog and compute its geometry.
pub async fn construct_route(
    State(state): State<Arc<AppState>>,
    Json(plan): Json<FlightPlan>,
) -> impl IntoResponse {
    let waypoints = match resolve_route(
        &state.catalog,
        &plan.departure,
        &plan.arrival,
        &plan.route,
        &state.plan_options,
    ) {
        Ok(waypoints) => waypoints,
        Err(PlanError::UnknownAirport(ident)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Airport not found: {ident}") })),
            );
        }
    };

    let geometry = match RouteGeometry::compute(&waypoints) {
        Ok(geometry) => geometry,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            );
        }
    };

    if let Some(callsign) = plan.callsign.as_deref() {
        state
            .routes
            .upsert(callsign, waypoints.clone(), geometry.clone());
        tracing::info!(
            callsign = %callsign,
            waypoints = waypoints.len(),
            "constructed and cached route"
        );
    }

    (StatusCode::OK, Json(geometry_payload(&waypoints, &geometry)))
}

/// Fetch a filed plan from the provider and compute its geometry.
pub async fn fetch_route(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let plan = match state.provider.fetch_flight_plan(&user_id).await {
        Ok(plan) => plan,
        Err(err) => {
            tracing::warn!(user_id = %user_id, error = %err, "provider fetch failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            );
        }
    };

    let waypoints = plan.into_waypoints();
    match RouteGeometry::compute(&waypoints) {
        Ok(geometry) => (StatusCode::OK, Json(geometry_payload(&waypoints, &geometry))),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

/// Remaining-distance report for a position along a route.
///
/// A degenerate route (under two waypoints, or zero length) yields `null`
/// rather than an error.
pub async fn route_progress(Json(request): Json<ProgressRequest>) -> impl IntoResponse {
    Json(progress::route_progress(
        &request.waypoints,
        request.lat,
        request.lon,
    ))
}

/// Read a cached constructed route.
pub async fn cached_route(
    State(state): State<Arc<AppState>>,
    Path(callsign): Path<String>,
) -> impl IntoResponse {
    match state.routes.get(&callsign) {
        Some(entry) => (StatusCode::OK, Json(json!(entry))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No cached route for callsign" })),
        ),
    }
}

/// Evict a cached constructed route.
pub async fn evict_cached_route(
    State(state): State<Arc<AppState>>,
    Path(callsign): Path<String>,
) -> StatusCode {
    if state.routes.evict(&callsign) {
        tracing::info!(callsign = %callsign, "evicted cached route");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
