//! Provider API HTTP client.

use anyhow::{Context, Result};
use flightmap_core::Waypoint;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for a SimBrief-style flight-plan provider.
pub struct ProviderClient {
    client: Client,
    base_url: String,
}

/// Top-level provider response. Only the navlog is consumed.
#[derive(Debug, Deserialize)]
pub struct ProviderPlan {
    pub navlog: ProviderNavlog,
}

#[derive(Debug, Deserialize)]
pub struct ProviderNavlog {
    #[serde(default)]
    pub fix: Vec<ProviderFix>,
}

/// A navlog fix as delivered by the provider.
///
/// Coordinates must arrive as JSON numbers; the legacy string encoding
/// (with its hyphen-splitting sign recovery) is rejected at this boundary.
#[derive(Debug, Deserialize)]
pub struct ProviderFix {
    pub ident: String,
    pub pos_lat: f64,
    pub pos_long: f64,
}

impl ProviderPlan {
    /// Navlog fixes in filed order as core waypoints.
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.navlog
            .fix
            .into_iter()
            .map(|fix| Waypoint::new(fix.ident, fix.pos_lat, fix.pos_long))
            .collect()
    }
}

impl ProviderClient {
    /// Create a new provider client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the filed flight plan for a provider user id.
    pub async fn fetch_flight_plan(&self, user_id: &str) -> Result<ProviderPlan> {
        let url = format!(
            "{}/api/xml.fetcher.php?userid={}&json=1",
            self.base_url.trim_end_matches('/'),
            user_id
        );
        tracing::debug!(%url, "fetching flight plan");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("provider request failed")?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("provider returned {}", status);
        }

        response
            .json::<ProviderPlan>()
            .await
            .context("provider returned a malformed flight plan")
    }
}
