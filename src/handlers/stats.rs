//! Temperature statistics endpoint handlers.
//!
//! Both routes answer with a one-element array holding the average, minimum
//! and maximum temperature over a date range. `/api/v1.0/:start` runs up to
//! the reference window's latest date, `/api/v1.0/:start/:end` up to `end`.
//! Aggregates are `null` when no measurement falls in the range.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, parse_date_param};
use crate::dataset::TemperatureStats;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;

/// Aggregate temperatures for one date range
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "start date")]
    pub start_date: NaiveDate,
    /// Only present when the request named an end date
    #[serde(rename = "end date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "avg temp")]
    pub avg_temp: Option<f64>,
    #[serde(rename = "min temp")]
    pub min_temp: Option<f64>,
    #[serde(rename = "max temp")]
    pub max_temp: Option<f64>,
}

impl StatsResponse {
    fn new(start_date: NaiveDate, end_date: Option<NaiveDate>, stats: TemperatureStats) -> Self {
        Self {
            start_date,
            end_date,
            avg_temp: stats.avg,
            min_temp: stats.min,
            max_temp: stats.max,
        }
    }
}

/// Handle GET /api/v1.0/:start requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    respond(&state, "/api/v1.0/:start", &start, None)
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn start_end_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    respond(&state, "/api/v1.0/:start/:end", &start, Some(&end))
}

fn respond(state: &AppState, endpoint: &str, start: &str, end: Option<&str>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        start = start,
        end = end.unwrap_or("none"),
        "Processing temperature stats request"
    );

    match compute_stats(state, start, end) {
        Ok(response) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Temperature stats request successful"
            );
            Json(vec![response]).into_response()
        }
        Err(error) => {
            let params = match end {
                Some(end) => format!("start={}, end={}", start, end),
                None => format!("start={}", start),
            };
            error_response(error, endpoint, &request_id, Some(&params))
        }
    }
}

fn compute_stats(state: &AppState, start: &str, end: Option<&str>) -> Result<StatsResponse> {
    let start_date = parse_date_param("start", start)?;
    let end_date = end.map(|end| parse_date_param("end", end)).transpose()?;

    let stats = state.dataset.temperature_stats(start_date, end_date);
    Ok(StatsResponse::new(start_date, end_date, stats))
}
