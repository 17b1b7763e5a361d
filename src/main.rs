use clap::Parser;
use nearstay::catalog::{self, Hotel};
use nearstay::geo::{self, Position};
use nearstay::proximity::{self, ProximityMatch};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// Nearstay — hotel proximity discovery engine.
///
/// Picks one hotel from a catalog and finds every hotel within a given
/// radius of it. Emits the group as JSON for a map renderer.
///
/// Examples:
///   nearstay "The Shelbourne"
///   nearstay --hotel "The Shelbourne" --radius-km 5
///   nearstay "The Marker" --data dublin.json -r 1.5
///   nearstay --list
#[derive(Parser)]
#[command(name = "nearstay", version, about, long_about = None)]
struct Cli {
    /// Reference hotel name (positional). Example: nearstay "The Shelbourne"
    #[arg(index = 1)]
    hotel_positional: Option<String>,

    /// Reference hotel name (named). Example: --hotel "The Shelbourne"
    #[arg(long)]
    hotel: Option<String>,

    /// Hotel catalog: a JSON array of {name, lat, lon} records.
    #[arg(long, short = 'd', default_value = "hotels.json")]
    data: PathBuf,

    /// Search radius in kilometers.
    #[arg(long, short = 'r', default_value_t = 3.0)]
    radius_km: f64,

    /// List the hotel names in the catalog and exit.
    #[arg(long)]
    list: bool,
}

/// JSON document printed to stdout.
#[derive(Serialize)]
struct Output {
    reference: Hotel,
    radius_km: f64,
    count: usize,
    /// Mean position of the result set — where a map renderer should center.
    #[serde(skip_serializing_if = "Option::is_none")]
    center: Option<Position>,
    hotels: Vec<ProximityMatch>,
}

fn main() {
    let cli = Cli::parse();

    let hotels = catalog::load_hotels(&cli.data).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if cli.list {
        for name in catalog::hotel_names(&hotels) {
            println!("{}", name);
        }
        return;
    }

    // Priority: --hotel > positional > error
    let reference_name = match cli.hotel.as_deref().or(cli.hotel_positional.as_deref()) {
        Some(name) => name,
        None => {
            eprintln!("Error: No hotel selected.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  nearstay \"The Shelbourne\"");
            eprintln!("  nearstay --hotel \"The Shelbourne\" --radius-km 5");
            eprintln!("  nearstay --list");
            process::exit(1);
        }
    };

    if !cli.radius_km.is_finite() {
        eprintln!("Error: Invalid radius '{}'.", cli.radius_km);
        process::exit(1);
    }

    // Resolve the reference up front for the banner; a radius below zero can
    // leave it out of the matches.
    let reference = proximity::find_reference(&hotels, reference_name)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        })
        .clone();

    let matches = proximity::matches_within_radius(&hotels, reference_name, cli.radius_km)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });

    // ── Banner and match table to stderr ────────────────────────

    eprintln!("  \u{1F4CD} {} — {}", reference.name, geo::format_position(reference.position()));
    eprintln!("  {} hotel(s) within {:.1} km:", matches.len(), cli.radius_km);
    for m in &matches {
        eprintln!("    {:>7.2} km  {}", m.distance_km, m.hotel.name);
    }

    // ── JSON to stdout ──────────────────────────────────────────

    let positions: Vec<Position> = matches.iter().map(|m| m.hotel.position()).collect();
    let output = Output {
        reference,
        radius_km: cli.radius_km,
        count: matches.len(),
        center: geo::mean_position(&positions),
        hotels: matches,
    };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
