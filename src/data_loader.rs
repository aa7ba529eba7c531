//! SQLite data loading functionality.
//!
//! This module opens the backing store read-only, reads the `measurement`
//! and `station` tables with explicit column lists into typed records, and
//! builds the application state from them. The connection pool only lives
//! for the duration of the load.

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{Config, DataConfig};
use crate::dataset::{Dataset, Measurement, ReferenceWindow, Station};
use crate::error::{ClimateError, Result};
use crate::logging::log_data_load_stats;
use crate::state::AppState;

const MEASUREMENT_QUERY: &str = "SELECT station, date, prcp, tobs FROM measurement";
const STATION_QUERY: &str = "SELECT station, name, latitude, longitude, elevation FROM station";
const LATEST_DATE_QUERY: &str = "SELECT MAX(date) FROM measurement";

#[derive(Debug, FromRow)]
struct MeasurementRow {
    station: String,
    date: String,
    prcp: Option<f64>,
    tobs: f64,
}

#[derive(Debug, FromRow)]
struct StationRow {
    station: String,
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

/// Load the SQLite store into memory and create the application state
pub async fn load_sqlite(path: &Path, config: Config) -> Result<AppState> {
    let started = Instant::now();
    let pool = open_read_only(path).await?;

    // Close the pool whether or not the reads succeed
    let loaded = read_tables(&pool, &config.data).await;
    pool.close().await;
    let (measurements, stations, reference) = loaded?;

    let dataset = Dataset::new(measurements, stations, reference);

    log_data_load_stats(
        &path.display().to_string(),
        dataset.measurement_count(),
        dataset.station_count(),
        dataset.date_range(),
        &reference,
        started.elapsed(),
    );

    Ok(AppState::new(config, dataset))
}

/// Open a read-only pool on an existing store
pub async fn open_read_only(path: &Path) -> Result<SqlitePool> {
    // Check if the file exists, SQLite would otherwise report a vague error
    if !path.exists() {
        return Err(ClimateError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Store not found: {}", path.display()),
        )));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    info!("Opened store: {}", path.display());
    Ok(pool)
}

async fn read_tables(
    pool: &SqlitePool,
    data: &DataConfig,
) -> Result<(Vec<Measurement>, Vec<Station>, ReferenceWindow)> {
    let measurements = fetch_measurements(pool).await?;
    debug!("Read {} measurement rows", measurements.len());

    let stations = fetch_stations(pool).await?;
    debug!("Read {} station rows", stations.len());

    let latest = if data.derive_reference_date {
        match fetch_latest_date(pool).await? {
            Some(date) => date,
            None => {
                warn!(
                    fallback = %data.reference_date,
                    "Measurement table is empty, keeping configured reference date"
                );
                data.reference_date
            }
        }
    } else {
        data.reference_date
    };

    Ok((
        measurements,
        stations,
        ReferenceWindow::ending_at(latest, data.window_days),
    ))
}

/// Read every measurement row as a typed record
pub async fn fetch_measurements(pool: &SqlitePool) -> Result<Vec<Measurement>> {
    let rows = sqlx::query_as::<_, MeasurementRow>(MEASUREMENT_QUERY)
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| {
            Ok(Measurement {
                date: parse_stored_date(&row.date)?,
                station_id: row.station,
                precipitation: row.prcp,
                temperature_observation: row.tobs,
            })
        })
        .collect()
}

/// Read every station row as a typed record, in stored order
pub async fn fetch_stations(pool: &SqlitePool) -> Result<Vec<Station>> {
    let rows = sqlx::query_as::<_, StationRow>(STATION_QUERY)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Station {
            station_id: row.station,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation: row.elevation,
        })
        .collect())
}

/// Latest measurement date in the store, `None` for an empty table
pub async fn fetch_latest_date(pool: &SqlitePool) -> Result<Option<NaiveDate>> {
    let latest: Option<String> = sqlx::query_scalar(LATEST_DATE_QUERY)
        .fetch_one(pool)
        .await?;

    latest.as_deref().map(parse_stored_date).transpose()
}

fn parse_stored_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| ClimateError::DataLoad {
        message: format!("Unparseable stored date '{}': {}", value, e),
    })
}
