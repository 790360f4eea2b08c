//! In-memory server state: the navdata catalog and the route cache.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use flightmap_core::{NavCatalog, RouteGeometry, RoutePlanOptions, Waypoint};
use flightmap_provider::ProviderClient;
use serde::Serialize;

/// A constructed route cached under its callsign.
#[derive(Debug, Clone, Serialize)]
pub struct CachedRoute {
    pub callsign: String,
    pub waypoints: Vec<Waypoint>,
    pub geometry: RouteGeometry,
    pub cached_at: DateTime<Utc>,
}

/// Callsign-keyed cache of constructed routes with TTL eviction.
///
/// The single owner of per-callsign route state; all access goes through
/// explicit upsert/get/evict.
pub struct RouteCache {
    entries: DashMap<String, CachedRoute>,
    ttl: Duration,
}

impl RouteCache {
    pub fn new(ttl_s: u64) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Duration::seconds(ttl_s as i64),
        }
    }

    /// Insert or replace the route for a callsign.
    pub fn upsert(&self, callsign: &str, waypoints: Vec<Waypoint>, geometry: RouteGeometry) {
        self.entries.insert(
            callsign.to_string(),
            CachedRoute {
                callsign: callsign.to_string(),
                waypoints,
                geometry,
                cached_at: Utc::now(),
            },
        );
    }

    /// Fetch a cached route; expired entries are evicted on access.
    pub fn get(&self, callsign: &str) -> Option<CachedRoute> {
        let expired = match self.entries.get(callsign) {
            Some(entry) => Utc::now() - entry.cached_at > self.ttl,
            None => return None,
        };
        if expired {
            self.entries.remove(callsign);
            return None;
        }
        self.entries.get(callsign).map(|entry| entry.value().clone())
    }

    /// Remove a cached route. Returns whether an entry existed.
    pub fn evict(&self, callsign: &str) -> bool {
        self.entries.remove(callsign).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Application state shared across all handlers.
pub struct AppState {
    pub catalog: NavCatalog,
    pub routes: RouteCache,
    pub provider: ProviderClient,
    pub plan_options: RoutePlanOptions,
}

impl AppState {
    pub fn new(
        catalog: NavCatalog,
        provider: ProviderClient,
        plan_options: RoutePlanOptions,
        route_cache_ttl_s: u64,
    ) -> Self {
        Self {
            catalog,
            routes: RouteCache::new(route_cache_ttl_s),
            provider,
            plan_options,
        }
    }
}
