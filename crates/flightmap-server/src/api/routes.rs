//! REST API router.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{geometry, request_id, waypoints};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/waypoints", get(waypoints::list_waypoints))
        .route("/v1/waypoints/:name", get(waypoints::waypoint_by_name))
        .route("/v1/routes/geometry", post(geometry::route_geometry))
        .route("/v1/routes/construct", post(geometry::construct_route))
        .route("/v1/routes/fetch/:user_id", get(geometry::fetch_route))
        .route("/v1/routes/progress", post(geometry::route_progress))
        .route(
            "/v1/routes/cache/:callsign",
            get(geometry::cached_route).delete(geometry::evict_cached_route),
        )
        .layer(middleware::from_fn(request_id::ensure_request_id))
}
