//! Route endpoint integration tests.
//!
//! Run with: cargo test --test routes_test -- --ignored
//! Requires a running flightmap server with navdata loaded.

use reqwest::Client;
use serde_json::json;

fn base_url() -> String {
    std::env::var("FLIGHTMAP_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore]
async fn health_endpoint_responds() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
}

#[tokio::test]
#[ignore]
async fn geometry_roundtrip_against_live_server() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/v1/routes/geometry", base_url()))
        .json(&json!({
            "waypoints": [
                { "ident": "A", "lat": 10.0, "lon": 179.0 },
                { "ident": "TOD", "lat": 10.0, "lon": -179.0 },
                { "ident": "B", "lat": 10.0, "lon": -170.0 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["geometry"]["segments"].as_array().unwrap().len(), 2);
    assert!(body["geometry"]["tod"].is_object());
}

#[tokio::test]
#[ignore]
async fn waypoint_listing_is_served() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/v1/waypoints", base_url()))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["waypoints"].is_array());
}
