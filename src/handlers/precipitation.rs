//! Precipitation endpoint handler.
//!
//! Returns the daily precipitation readings of the reference window.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::generate_request_id;
use crate::state::AppState;

/// One precipitation reading
#[derive(Debug, Serialize)]
pub struct PrecipitationEntry {
    pub date: NaiveDate,
    /// `null` when the station did not report precipitation
    pub prcp: Option<f64>,
}

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<PrecipitationEntry>> {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let window = state.dataset.reference();

    debug!(
        endpoint = "/api/v1.0/precipitation",
        request_id = %request_id,
        since = %window.start,
        "Processing precipitation request"
    );

    let entries: Vec<PrecipitationEntry> = state
        .dataset
        .precipitation_since(window.start)
        .into_iter()
        .map(|(date, prcp)| PrecipitationEntry { date, prcp })
        .collect();

    info!(
        endpoint = "/api/v1.0/precipitation",
        request_id = %request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        rows = entries.len(),
        "Precipitation request successful"
    );

    Json(entries)
}
