//! API routes for the flightmap server.

pub mod geometry;
pub mod request_id;
mod routes;
pub mod waypoints;

use axum::Router;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
