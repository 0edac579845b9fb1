//! Test utilities and shared test helpers for the sales report workspace.
//!
//! This module provides common testing utilities and helper functions that can
//! be used across all crates in the workspace for unit and integration testing.

use chrono::NaiveDate;
use std::sync::Once;

use crate::types::SeriesPoint;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Shorthand for a calendar date in test fixtures.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Generate series data for chart testing.
pub mod series_fixtures {
    use super::SeriesPoint;

    /// Product totals in the shape the product query returns.
    pub fn product_series() -> Vec<SeriesPoint> {
        vec![
            SeriesPoint::new("Desk Lamp", 240.0),
            SeriesPoint::new("Monitor", 1899.5),
            SeriesPoint::new("Keyboard", 320.25),
        ]
    }

    /// Customer totals sorted descending, as the customer query returns them.
    pub fn customer_series(count: usize) -> Vec<SeriesPoint> {
        (0..count)
            .map(|i| SeriesPoint::new(format!("Customer {i}"), (count - i) as f64 * 100.0))
            .collect()
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for sale dates spread across a few years.
    pub fn sale_date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2021i32..=2024, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
    }

    /// Strategy for sale amounts in whole cents.
    pub fn amount_strategy() -> impl Strategy<Value = f64> {
        (0u32..=1_000_000u32).prop_map(|cents| f64::from(cents) / 100.0)
    }

    /// Strategy for a list of (date, amount) daily totals.
    pub fn daily_totals_strategy(max_len: usize) -> impl Strategy<Value = Vec<(NaiveDate, f64)>> {
        proptest::collection::vec((sale_date_strategy(), amount_strategy()), 0..max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
        assert_approx_eq(1.0, 0.9999, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }

    #[test]
    fn test_customer_series_is_descending() {
        let series = series_fixtures::customer_series(5);
        assert_eq!(series.len(), 5);
        assert!(series.windows(2).all(|pair| pair[0].value > pair[1].value));
    }
}
