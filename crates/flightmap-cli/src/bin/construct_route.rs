use anyhow::Result;
use clap::Parser;
use flightmap_cli::geometry_summary;
use flightmap_core::{
    resolve_route, route_feature_collection, NavCatalog, RouteGeometry, RoutePlanOptions,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Navdata JSON file with airports and fixes
    #[arg(long, default_value = "data/navdata.json")]
    navdata: PathBuf,

    /// Departure airport ident
    #[arg(long)]
    departure: String,

    /// Arrival airport ident
    #[arg(long)]
    arrival: String,

    /// Filed route string, e.g. "DET L6 DVR UL9 KONAN"
    #[arg(long, default_value = "")]
    route: String,

    /// Maximum accepted leg length in kilometers
    #[arg(long, default_value_t = 1000.0)]
    max_leg_km: f64,

    /// Emit the GeoJSON render payload instead of a text summary
    #[arg(long)]
    geojson: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = NavCatalog::from_path(&args.navdata)?;
    let options = RoutePlanOptions {
        max_leg_distance_m: args.max_leg_km * 1000.0,
    };
    let waypoints = resolve_route(
        &catalog,
        &args.departure,
        &args.arrival,
        &args.route,
        &options,
    )?;

    let geometry = RouteGeometry::compute(&waypoints)?;

    if args.geojson {
        let collection = route_feature_collection(&waypoints, &geometry);
        println!("{}", serde_json::to_string_pretty(&collection)?);
    } else {
        for waypoint in &waypoints {
            println!("{:>8}  {:9.4}  {:9.4}", waypoint.ident, waypoint.lat, waypoint.lon);
        }
        println!();
        print!("{}", geometry_summary(&waypoints, &geometry));
    }

    Ok(())
}
