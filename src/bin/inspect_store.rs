//! Print a summary of a climate store: table sizes, measurement date range
//! and the station list. Useful to check the configured reference date
//! against what the store actually holds.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use climate_api::config::default_reference_date;
use climate_api::data_loader::{fetch_latest_date, fetch_measurements, fetch_stations, open_read_only};

#[derive(Parser, Debug)]
#[command(name = "inspect_store", about = "Summarize a climate SQLite store")]
struct Args {
    /// Path to the SQLite store
    #[arg(env = "CLIMATE_DATABASE")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("Inspecting store: {}", args.database.display());
    let pool = open_read_only(&args.database).await?;

    let measurements = fetch_measurements(&pool).await?;
    let stations = fetch_stations(&pool).await?;
    let latest = fetch_latest_date(&pool).await?;
    pool.close().await;

    println!("\n=== MEASUREMENTS ===");
    println!("  rows: {}", measurements.len());
    if let Some(first) = measurements.iter().map(|m| m.date).min() {
        println!("  first date: {}", first);
    }
    match latest {
        Some(latest) => {
            println!("  latest date: {}", latest);
            let reference = default_reference_date();
            if latest != reference {
                println!(
                    "  note: latest stored date differs from the default reference date {}",
                    reference
                );
            }
        }
        None => println!("  latest date: none"),
    }
    let missing_prcp = measurements.iter().filter(|m| m.precipitation.is_none()).count();
    println!("  rows without precipitation: {}", missing_prcp);

    println!("\n=== STATIONS ===");
    println!("  rows: {}", stations.len());
    for station in &stations {
        let count = measurements
            .iter()
            .filter(|m| m.station_id == station.station_id)
            .count();
        println!(
            "  {} {} ({:.4}, {:.4}, {} m) - {} measurements",
            station.station_id,
            station.name,
            station.latitude,
            station.longitude,
            station.elevation,
            count
        );
    }

    Ok(())
}
