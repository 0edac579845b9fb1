//! Tests for the shared data model in sales-report-common.

use sales_report_common::types::*;
use std::collections::HashSet;

#[test]
fn test_chart_kinds_have_fixed_file_names() {
    let names: Vec<_> = ChartKind::ALL.iter().map(|kind| kind.file_name()).collect();
    assert_eq!(
        names,
        vec!["monthly_sales.png", "product_sales.png", "customer_sales.png"]
    );

    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), ChartKind::ALL.len());
}

#[test]
fn test_chart_kind_display() {
    assert_eq!(ChartKind::MonthlySales.to_string(), "monthly_sales");
    assert_eq!(ChartKind::CustomerSales.to_string(), "customer_sales");
}

#[test]
fn test_chart_artifact_aspect_ratio() {
    let artifact = ChartArtifact {
        kind: ChartKind::ProductSales,
        title: "Total Sales by Product".to_string(),
        png: vec![0; 16],
        width_px: 4800,
        height_px: 1600,
    };
    assert!((artifact.aspect_ratio() - 1.0 / 3.0).abs() < 1e-12);

    let degenerate = ChartArtifact {
        width_px: 0,
        ..artifact.clone()
    };
    assert_eq!(degenerate.aspect_ratio(), 0.0);
}

#[test]
fn test_chart_artifact_debug_omits_bytes() {
    let artifact = ChartArtifact {
        kind: ChartKind::MonthlySales,
        title: "Total Sales by Month".to_string(),
        png: vec![7; 1024],
        width_px: 10,
        height_px: 5,
    };
    let debug = format!("{artifact:?}");
    assert!(debug.contains("png_bytes: 1024"));
    assert!(!debug.contains("7, 7"));
}

#[test]
fn test_report_data_series_lookup() {
    let data = ReportData {
        monthly: vec![SeriesPoint::new("Jan", 100.0)],
        products: vec![],
        customers: vec![SeriesPoint::new("Ada Lovelace", 40.0)],
    };

    assert_eq!(data.series(ChartKind::MonthlySales)[0].label, "Jan");
    assert!(data.series(ChartKind::ProductSales).is_empty());
    assert!(!data.is_empty());
    assert!(ReportData::default().is_empty());
}
