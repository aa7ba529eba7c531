//! # climate-api
//!
//! A small read-only HTTP API over a fixed dataset of daily precipitation and
//! temperature observations.
//!
//! The backing SQLite store is read once at startup into typed records and
//! served from memory. Every route is a bounded date-range scan over the
//! measurement table, or a plain listing of the station table.
//!
//! ## Architecture
//!
//! - **Data Layer**: [`data_loader`] reads the store, [`dataset`] answers date queries
//! - **API Layer**: [`handlers`] maps the fixed routes onto dataset calls and renders JSON

pub mod config;
pub mod data_loader;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;

pub use config::Config;
pub use dataset::{Dataset, Measurement, ReferenceWindow, Station, TemperatureStats};
pub use error::{ClimateError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_data_load_stats,
    log_request_error,
};
pub use state::AppState;
