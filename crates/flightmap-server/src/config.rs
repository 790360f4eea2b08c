//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub navdata_path: String,
    pub provider_url: String,
    /// How long a cached route stays valid, in seconds
    pub route_cache_ttl_s: u64,
    /// Maximum accepted leg length during route resolution, in meters
    pub max_leg_distance_m: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("FLIGHTMAP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            navdata_path: env::var("FLIGHTMAP_NAVDATA")
                .unwrap_or_else(|_| "data/navdata.json".to_string()),
            provider_url: env::var("FLIGHTMAP_PROVIDER_URL")
                .unwrap_or_else(|_| "https://www.simbrief.com".to_string()),
            route_cache_ttl_s: env::var("FLIGHTMAP_ROUTE_CACHE_TTL_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900),
            max_leg_distance_m: env::var("FLIGHTMAP_MAX_LEG_M")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1_000_000.0),
        }
    }
}
