//! Temperature observations endpoint handler.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::generate_request_id;
use crate::state::AppState;

/// One temperature observation
#[derive(Debug, Serialize)]
pub struct TobsEntry {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Json<Vec<TobsEntry>> {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let window = state.dataset.reference();

    debug!(
        endpoint = "/api/v1.0/tobs",
        request_id = %request_id,
        since = %window.start,
        "Processing temperature observation request"
    );

    let entries: Vec<TobsEntry> = state
        .dataset
        .temperature_observations_since(window.start)
        .into_iter()
        .map(|(date, tobs)| TobsEntry { date, tobs })
        .collect();

    info!(
        endpoint = "/api/v1.0/tobs",
        request_id = %request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        rows = entries.len(),
        "Temperature observation request successful"
    );

    Json(entries)
}
