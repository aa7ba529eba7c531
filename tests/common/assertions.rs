//! Assertion utilities for testing.
//!
//! Floating-point comparisons for aggregates that come back through JSON.

use serde_json::Value;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a JSON field holds a number approximately equal to `expected`.
pub fn assert_json_number(value: &Value, field: &str, expected: f64) {
    let actual = value[field]
        .as_f64()
        .unwrap_or_else(|| panic!("Field {} is not a number: {}", field, value));
    assert_approx_eq(actual, expected, None);
}

/// Assert that every `date` field of a JSON array is in ascending order.
pub fn assert_dates_ascending(rows: &[Value]) {
    let dates: Vec<&str> = rows
        .iter()
        .map(|row| row["date"].as_str().expect("row without a date"))
        .collect();

    for pair in dates.windows(2) {
        assert!(pair[0] <= pair[1], "Dates out of order: {} > {}", pair[0], pair[1]);
    }
}
