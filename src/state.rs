//! Application state management for the climate API.
//!
//! This module defines the shared state that is passed to all handlers,
//! containing the loaded dataset and the configuration it was loaded with.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{ClimateError, Result};

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Measurement and station tables
    pub dataset: Dataset,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    /// Validate that the application state is consistent and ready for use
    pub fn validate(&self) -> Result<()> {
        if self.dataset.station_count() == 0 {
            return Err(ClimateError::DataLoad {
                message: "No stations found in the store".to_string(),
            });
        }

        let window = self.dataset.reference();
        if window.start > window.latest {
            return Err(ClimateError::DataLoad {
                message: format!(
                    "Reference window starts after it ends ({} > {})",
                    window.start, window.latest
                ),
            });
        }

        Ok(())
    }
}
