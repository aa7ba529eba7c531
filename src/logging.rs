//! Logging utilities for the climate API server.
//!
//! This module provides structured logging functionality to make logs more
//! searchable, analyzable, and useful for production deployments.

use chrono::NaiveDate;
use std::time::Duration;
use tracing::{error, info, Level};

use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::dataset::ReferenceWindow;
use crate::error::ClimateError;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log a summary of what was read from the store at startup
pub fn log_data_load_stats(
    store_path: &str,
    measurement_count: usize,
    station_count: usize,
    date_range: Option<(NaiveDate, NaiveDate)>,
    reference: &ReferenceWindow,
    elapsed: Duration,
) {
    let (first_date, last_date) = match date_range {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => ("none".to_string(), "none".to_string()),
    };

    info!(
        operation = "data_load",
        store_path = store_path,
        measurement_count = measurement_count,
        station_count = station_count,
        first_date = %first_date,
        last_date = %last_date,
        window_start = %reference.start,
        window_latest = %reference.latest,
        duration_ms = elapsed.as_secs_f64() * 1000.0,
        "Data loaded successfully"
    );
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    error!(
        error = %error,
        endpoint = endpoint,
        request_id = request_id,
        params = params.unwrap_or("none"),
        status = error.status_code().as_u16(),
        "Request processing error"
    );
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2); // IDs should be unique
    }

    #[test]
    fn test_logging_helpers_do_not_panic() {
        let latest = NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();
        let window = ReferenceWindow::ending_at(latest, 365);
        log_data_load_stats("store.sqlite", 0, 0, None, &window, Duration::from_millis(3));

        let error = ClimateError::InvalidDate {
            param: "start".to_string(),
            value: "x".to_string(),
        };
        log_request_error(&error, "/api/v1.0/:start", &generate_request_id(), None);
    }
}
