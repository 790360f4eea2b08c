use anyhow::{bail, Result};
use clap::Parser;
use flightmap_cli::{geometry_summary, load_waypoints};
use flightmap_core::{route_feature_collection, RouteGeometry};
use flightmap_provider::ProviderClient;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON plan file (waypoint array, or an object with a "waypoints" key)
    #[arg(long, conflicts_with = "user")]
    input: Option<PathBuf>,

    /// Provider user id to fetch the plan for
    #[arg(long)]
    user: Option<String>,

    /// Provider base URL
    #[arg(long, default_value = "https://www.simbrief.com")]
    provider_url: String,

    /// Emit the GeoJSON render payload instead of a text summary
    #[arg(long)]
    geojson: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let waypoints = match (&args.input, &args.user) {
        (Some(path), _) => load_waypoints(path)?,
        (None, Some(user)) => {
            let client = ProviderClient::new(args.provider_url.clone());
            println!("Fetching flight plan for user {}...", user);
            client.fetch_flight_plan(user).await?.into_waypoints()
        }
        (None, None) => bail!("either --input or --user is required"),
    };

    let geometry = RouteGeometry::compute(&waypoints)?;

    if args.geojson {
        let collection = route_feature_collection(&waypoints, &geometry);
        println!("{}", serde_json::to_string_pretty(&collection)?);
    } else {
        print!("{}", geometry_summary(&waypoints, &geometry));
    }

    Ok(())
}
