//! HTTP request handlers for the climate API.
//!
//! This module contains all the endpoint handlers for the web server and
//! the router that ties them to their fixed URL shapes.

pub mod home;
pub mod precipitation;
pub mod stations;
pub mod stats;
pub mod tobs;

pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use stats::{start_end_handler, start_handler};
pub use tobs::tobs_handler;

use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::{ClimateError, Result};
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the router serving every route over the shared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(start_handler))
        .route("/api/v1.0/:start/:end", get(start_end_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Parse a `YYYY-MM-DD` path parameter.
///
/// The year must be exactly four digits; chrono's `%Y` alone also takes
/// signed and shorter years. Month and day may be unpadded.
pub(crate) fn parse_date_param(param: &str, value: &str) -> Result<NaiveDate> {
    let invalid = || ClimateError::InvalidDate {
        param: param.to_string(),
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

/// Log a failed request and render it as a JSON error body
pub(crate) fn error_response(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
