//! End-to-end runs of the report pipeline against scratch sales stores.
//!
//! Charts and the PDF need system fonts. A run is skipped only when the chart
//! font is not installed or the PDF font search fails; any other error fails.

use sales_report::{AppError, ReportPipeline};
use sales_report_common::test_utils::{create_temp_dir, date, init_test_logging};
use sales_report_common::SalesReportError;
use sales_report_config::Config;
use sales_report_data::fixtures::SalesFixture;
use sales_report_graphs::ChartTemplate;
use std::path::Path;

fn config_for(database: &Path, output: &Path) -> Config {
    let mut config = Config::default()
        .with_database_path(database)
        .with_output_directory(output);
    config.charts.width = 800;
    config.charts.height = 300;
    config.charts.scale = 1;
    config
}

fn chart_font_missing() -> bool {
    let missing = !ChartTemplate::presentation().font_available();
    if missing {
        eprintln!("skipping: chart font not installed");
    }
    missing
}

fn missing_fonts(err: &AppError) -> bool {
    matches!(err.report_error(), Some(SalesReportError::Font { .. }))
}

#[tokio::test]
async fn test_full_run_writes_charts_and_report() {
    init_test_logging();
    if chart_font_missing() {
        return;
    }
    let store = SalesFixture::two_month_example()
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();
    let output = store.dir().join("output");
    let pipeline = ReportPipeline::new(config_for(store.path(), &output));

    let outcome = match pipeline.run(date(2024, 3, 1)).await {
        Ok(outcome) => outcome,
        Err(err) if missing_fonts(&err) => {
            eprintln!("skipping: {err}");
            return;
        }
        Err(err) => panic!("pipeline failed: {err}"),
    };

    let names: Vec<_> = outcome
        .charts
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["monthly_sales.png", "product_sales.png", "customer_sales.png"]
    );
    assert!(outcome.charts.iter().all(|p| p.is_file()));
    assert_eq!(outcome.report, output.join("sales_report.pdf"));
    assert!(std::fs::read(&outcome.report).unwrap().starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_rerun_overwrites_identical_charts() {
    init_test_logging();
    if chart_font_missing() {
        return;
    }
    let store = SalesFixture::with_customers(12)
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();
    let output = store.dir().join("output");
    let pipeline = ReportPipeline::new(config_for(store.path(), &output));

    let first = match pipeline.run(date(2024, 3, 1)).await {
        Ok(outcome) => outcome,
        Err(err) if missing_fonts(&err) => {
            eprintln!("skipping: {err}");
            return;
        }
        Err(err) => panic!("pipeline failed: {err}"),
    };
    let before: Vec<_> = first
        .charts
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();

    let second = pipeline.run(date(2024, 3, 2)).await.unwrap();
    let after: Vec<_> = second
        .charts
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();

    assert_eq!(first.charts, second.charts);
    assert_eq!(before, after);
    let pngs = std::fs::read_dir(&output)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
        .count();
    assert_eq!(pngs, 3);
}

#[tokio::test]
async fn test_empty_store_still_produces_report() {
    init_test_logging();
    if chart_font_missing() {
        return;
    }
    let store = SalesFixture::new().await.unwrap().finish().await.unwrap();
    let output = store.dir().join("output");
    let pipeline = ReportPipeline::new(config_for(store.path(), &output));

    match pipeline.run(date(2024, 3, 1)).await {
        Ok(outcome) => {
            assert_eq!(outcome.charts.len(), 3);
            assert!(outcome.report.is_file());
        }
        Err(err) if missing_fonts(&err) => eprintln!("skipping: {err}"),
        Err(err) => panic!("pipeline failed: {err}"),
    }
}

#[tokio::test]
async fn test_missing_database_fails_before_rendering() {
    init_test_logging();
    let dir = create_temp_dir();
    let output = dir.path().join("output");
    let pipeline = ReportPipeline::new(config_for(&dir.path().join("absent.db"), &output));

    let err = pipeline.run(date(2024, 3, 1)).await.unwrap_err();
    assert!(matches!(
        err.report_error(),
        Some(SalesReportError::Database { .. })
    ));
    assert!(!output.join("monthly_sales.png").exists());
    assert!(!dir.path().join("absent.db").exists());
}

#[tokio::test]
async fn test_output_path_blocked_by_file_is_io_error() {
    init_test_logging();
    let store = SalesFixture::two_month_example()
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();
    let output = store.dir().join("output");
    std::fs::write(&output, b"not a directory").unwrap();
    let pipeline = ReportPipeline::new(config_for(store.path(), &output));

    let err = pipeline.run(date(2024, 3, 1)).await.unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
