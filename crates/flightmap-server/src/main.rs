//! Flightmap server - backend for the map viewer's route and navdata needs.

mod api;
mod config;
mod state;

use anyhow::{Context, Result};
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;
use flightmap_core::{NavCatalog, RoutePlanOptions};
use flightmap_provider::ProviderClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flightmap_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting flightmap server...");

    let config = Config::from_env();
    let catalog = NavCatalog::from_path(&config.navdata_path)
        .with_context(|| format!("loading navdata from {}", config.navdata_path))?;
    tracing::info!(
        airports = catalog.airport_count(),
        fixes = catalog.fix_count(),
        "navdata loaded"
    );

    let plan_options = RoutePlanOptions {
        max_leg_distance_m: config.max_leg_distance_m,
    };
    let state = Arc::new(AppState::new(
        catalog,
        ProviderClient::new(config.provider_url.clone()),
        plan_options,
        config.route_cache_ttl_s,
    ));

    // Build the app
    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
