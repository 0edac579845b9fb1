//! Integration tests for sales-report-pdf crate.
//!
//! The document needs a TrueType family from the system; tests that lay out
//! text return early when none is installed.

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use sales_report_common::test_utils::{create_temp_dir, date, init_test_logging};
use sales_report_common::{ChartArtifact, ChartKind};
use sales_report_config::ReportConfig;
use sales_report_pdf::{report_title, ReportAssembler};
use std::io::Cursor;

fn assembler_or_skip() -> Option<ReportAssembler> {
    init_test_logging();
    match ReportAssembler::from_config(&ReportConfig::default()) {
        Ok(assembler) => Some(assembler),
        Err(err) if err.is_font_error() => {
            eprintln!("skipping: {err}");
            None
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fn artifact(kind: ChartKind, width: u32, height: u32) -> ChartArtifact {
    let image = RgbImage::from_pixel(width, height, image::Rgb([99, 110, 250]));
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .unwrap();

    ChartArtifact {
        kind,
        title: kind.to_string(),
        png,
        width_px: width,
        height_px: height,
    }
}

fn all_artifacts() -> Vec<ChartArtifact> {
    ChartKind::ALL
        .iter()
        .map(|&kind| artifact(kind, 120, 40))
        .collect()
}

#[test]
fn test_assemble_produces_pdf() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };

    let pdf = assembler
        .assemble(&all_artifacts(), date(2024, 3, 7))
        .unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_title_only_report_for_no_charts() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };

    let empty = assembler.assemble(&[], date(2024, 3, 7)).unwrap();
    let full = assembler
        .assemble(&all_artifacts(), date(2024, 3, 7))
        .unwrap();
    assert!(empty.starts_with(b"%PDF-"));
    assert!(full.len() > empty.len());
}

#[test]
fn test_write_creates_report_file() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };
    let dir = create_temp_dir();
    let path = dir.path().join("output").join("sales_report.pdf");

    assembler
        .write(&all_artifacts(), date(2024, 1, 31), &path)
        .unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
}

/// Page count from the page tree's `/Count` entry.
fn page_count(pdf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(pdf);
    text.match_indices("/Count")
        .filter_map(|(at, key)| {
            let digits: String = text[at + key.len()..]
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        })
        .max()
        .unwrap_or(0)
}

fn charts_of(count: usize, width: u32, height: u32) -> Vec<ChartArtifact> {
    (0..count)
        .map(|i| artifact(ChartKind::ALL[i % 3], width, height))
        .collect()
}

#[test]
fn test_charts_that_fit_share_the_first_page() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };

    // 20 mm title, then three 10 mm gaps and three 63.3 mm charts: 240 mm of 277 mm.
    let pdf = assembler
        .assemble(&charts_of(3, 1200, 400), date(2024, 6, 1))
        .unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn test_chart_that_does_not_fit_moves_to_next_page() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };

    // A 142.5 mm chart fits after the title; a second one would end at 325 mm.
    let one = assembler
        .assemble(&charts_of(1, 1200, 900), date(2024, 6, 1))
        .unwrap();
    assert_eq!(page_count(&one), 1);

    let two = assembler
        .assemble(&charts_of(2, 1200, 900), date(2024, 6, 1))
        .unwrap();
    assert_eq!(page_count(&two), 2);
}

#[test]
fn test_many_charts_flow_onto_following_pages() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };

    // Three charts fill the first page, the fourth starts the second.
    let pdf = assembler
        .assemble(&charts_of(6, 1200, 400), date(2024, 6, 1))
        .unwrap();
    assert_eq!(page_count(&pdf), 2);
}

#[test]
fn test_zero_width_artifact_rejected() {
    let Some(assembler) = assembler_or_skip() else {
        return;
    };

    let mut broken = artifact(ChartKind::MonthlySales, 10, 10);
    broken.width_px = 0;
    assert!(assembler.assemble(&[broken], date(2024, 6, 1)).is_err());
}

#[test]
fn test_title_uses_us_date() {
    assert_eq!(report_title(date(2024, 1, 5)), "Sales Report as of 01/05/2024");
}
