//! Flight-plan provider client.
//!
//! Fetches filed flight plans (navlog waypoints) from an external
//! provider's JSON API on behalf of the server and CLI.

pub mod client;

pub use client::{ProviderClient, ProviderNavlog, ProviderPlan};
