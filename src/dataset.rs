//! In-memory dataset accessor.
//!
//! Holds the measurement and station tables once they have been read from
//! the store, and answers the bounded date queries the HTTP routes need.
//! Measurements are kept sorted by date so every query is a binary-search
//! bounded slice of the table.

use chrono::{Days, NaiveDate};

/// One station's observations for one date
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Station that reported the observation
    pub station_id: String,
    /// Observation date
    pub date: NaiveDate,
    /// Precipitation, absent when the station did not report it
    pub precipitation: Option<f64>,
    /// Temperature observation in degrees
    pub temperature_observation: f64,
}

/// Metadata for one weather-reporting location
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// The fixed lookback period used by the routes that take no dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceWindow {
    /// Latest date of the window, inclusive
    pub latest: NaiveDate,
    /// First date of the window, inclusive
    pub start: NaiveDate,
}

impl ReferenceWindow {
    /// Window ending at `latest` and reaching `days` back
    pub fn ending_at(latest: NaiveDate, days: i64) -> Self {
        let days = Days::new(u64::try_from(days).unwrap_or(0));
        let start = latest.checked_sub_days(days).unwrap_or(NaiveDate::MIN);
        Self { latest, start }
    }
}

/// Average, minimum and maximum temperature over a date range.
///
/// All three are `None` when no measurement falls in the range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureStats {
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Read-only view over both tables
#[derive(Debug, Clone)]
pub struct Dataset {
    measurements: Vec<Measurement>,
    stations: Vec<Station>,
    reference: ReferenceWindow,
}

impl Dataset {
    /// Build a dataset from stored rows.
    ///
    /// Measurements are sorted by date; rows sharing a date keep their
    /// stored order. Stations are kept exactly as stored.
    pub fn new(
        mut measurements: Vec<Measurement>,
        stations: Vec<Station>,
        reference: ReferenceWindow,
    ) -> Self {
        measurements.sort_by_key(|m| m.date);
        Self {
            measurements,
            stations,
            reference,
        }
    }

    pub fn reference(&self) -> ReferenceWindow {
        self.reference
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Earliest and latest measurement dates, if any rows are loaded
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.measurements.first(), self.measurements.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// `(date, precipitation)` for every measurement on or after `since`.
    /// Missing precipitation is passed through as `None`.
    pub fn precipitation_since(&self, since: NaiveDate) -> Vec<(NaiveDate, Option<f64>)> {
        self.since(since)
            .iter()
            .map(|m| (m.date, m.precipitation))
            .collect()
    }

    /// `(date, temperature)` for every measurement on or after `since`
    pub fn temperature_observations_since(&self, since: NaiveDate) -> Vec<(NaiveDate, f64)> {
        self.since(since)
            .iter()
            .map(|m| (m.date, m.temperature_observation))
            .collect()
    }

    /// Station display names in stored order
    pub fn all_station_names(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.name.clone()).collect()
    }

    /// Temperature aggregates over `start..=end`.
    ///
    /// Without an explicit `end` the range stops at the reference window's
    /// latest date. An empty range, including `start > end`, yields all
    /// `None`.
    pub fn temperature_stats(&self, start: NaiveDate, end: Option<NaiveDate>) -> TemperatureStats {
        let end = end.unwrap_or(self.reference.latest);
        let rows = self.between(start, end);

        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for m in rows {
            sum += m.temperature_observation;
            min = min.min(m.temperature_observation);
            max = max.max(m.temperature_observation);
        }

        if rows.is_empty() {
            return TemperatureStats::default();
        }

        TemperatureStats {
            avg: Some(sum / rows.len() as f64),
            min: Some(min),
            max: Some(max),
        }
    }

    fn since(&self, since: NaiveDate) -> &[Measurement] {
        let lo = self.measurements.partition_point(|m| m.date < since);
        &self.measurements[lo..]
    }

    fn between(&self, start: NaiveDate, end: NaiveDate) -> &[Measurement] {
        if start > end {
            return &[];
        }
        let lo = self.measurements.partition_point(|m| m.date < start);
        let hi = self.measurements.partition_point(|m| m.date <= end);
        &self.measurements[lo..hi]
    }
}
