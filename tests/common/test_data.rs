//! Test data generation utilities.
//!
//! Builds SQLite stores with the same two tables as the published dataset,
//! filled with a small known set of rows.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// `(station, date, prcp, tobs)` rows written by [`create_test_store`]
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2016-08-22", Some(0.4), 70.0),
    ("USC00519397", "2016-08-23", Some(0.08), 77.0),
    ("USC00513117", "2016-08-23", None, 76.0),
    ("USC00519397", "2017-01-01", Some(0.0), 58.0),
    ("USC00519397", "2017-01-03", Some(0.0), 62.0),
    ("USC00513117", "2017-05-10", Some(0.21), 74.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
];

/// `(station, name)` rows written by [`create_test_store`]
pub const STATIONS: &[(&str, &str)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
    ("USC00514830", "KUALOA RANCH HEADQUARTERS 886.9, HI US"),
];

/// Creates a SQLite store with the `measurement` and `station` tables.
pub async fn create_test_store(path: &Path) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await?;
    }

    for (i, (station, name)) in STATIONS.iter().enumerate() {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*station)
        .bind(*name)
        .bind(21.0 + i as f64 * 0.1)
        .bind(-157.8)
        .bind(3.0 + i as f64)
        .execute(&pool)
        .await?;
    }

    pool.close().await;
    Ok(())
}
