//! Integration tests for sales-report-common crate.

use chrono::NaiveDate;
use sales_report_common::{
    format_currency_tick, format_us_date, format_value, series_total, truncate_label,
    SalesReportError, SeriesPoint,
};

#[test]
fn test_series_total() {
    let series = vec![
        SeriesPoint::new("Jan", 100.0),
        SeriesPoint::new("Feb", 50.0),
        SeriesPoint::new("Mar", 0.25),
    ];
    assert!((series_total(&series) - 150.25).abs() < f64::EPSILON);
    assert_eq!(series_total(&[]), 0.0);
}

#[test]
fn test_value_and_tick_formatting_agree_on_small_numbers() {
    assert_eq!(format_value(250.0), "250");
    assert_eq!(format_currency_tick("$", 250.0), "$250");
}

#[test]
fn test_format_us_date() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(format_us_date(date), "12/31/2024");
}

#[test]
fn test_truncate_label() {
    assert_eq!(truncate_label("Keyboard", 20), "Keyboard");
    assert_eq!(truncate_label("abcdefghij", 6), "abc...");
}

#[test]
fn test_error_display_formatting() {
    let error = SalesReportError::new("test error");
    assert_eq!(format!("{error}"), "test error");

    let config_error = SalesReportError::config("missing field");
    assert_eq!(format!("{config_error}"), "Configuration error: missing field");

    let graph_error = SalesReportError::graph("value is not finite");
    assert_eq!(format!("{graph_error}"), "Graph error: value is not finite");
}
