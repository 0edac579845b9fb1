//! Common type definitions shared by the reader, the renderer and the assembler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One bar of a chart: a category label and its summed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Category shown on the x axis (month, product name, customer name).
    pub label: String,
    /// Summed `total_price` for the category.
    pub value: f64,
}

impl SeriesPoint {
    /// Creates a new series point.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Sum of all values in a series.
pub fn series_total(series: &[SeriesPoint]) -> f64 {
    series.iter().map(|point| point.value).sum()
}

/// Aggregated series for the three charts, in the shape the renderer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// One point per month bucket, chronological.
    pub monthly: Vec<SeriesPoint>,
    /// One point per product with sales.
    pub products: Vec<SeriesPoint>,
    /// Top customers, descending by total.
    pub customers: Vec<SeriesPoint>,
}

impl ReportData {
    /// Series feeding the given chart.
    pub fn series(&self, kind: ChartKind) -> &[SeriesPoint] {
        match kind {
            ChartKind::MonthlySales => &self.monthly,
            ChartKind::ProductSales => &self.products,
            ChartKind::CustomerSales => &self.customers,
        }
    }

    /// Whether no series holds any point.
    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty() && self.products.is_empty() && self.customers.is_empty()
    }
}

/// The three charts that make up the report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Total sales per calendar month.
    MonthlySales,
    /// Total sales per product.
    ProductSales,
    /// Top customers by total sales.
    CustomerSales,
}

impl ChartKind {
    /// All chart kinds in the order they appear in the report.
    pub const ALL: [Self; 3] = [Self::MonthlySales, Self::ProductSales, Self::CustomerSales];

    /// File name of the rendered chart inside the output directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::MonthlySales => "monthly_sales.png",
            Self::ProductSales => "product_sales.png",
            Self::CustomerSales => "customer_sales.png",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MonthlySales => "monthly_sales",
            Self::ProductSales => "product_sales",
            Self::CustomerSales => "customer_sales",
        };
        f.write_str(name)
    }
}

/// A rendered chart handed from the renderer to the report assembler.
#[derive(Clone, PartialEq, Eq)]
pub struct ChartArtifact {
    /// Which chart this is.
    pub kind: ChartKind,
    /// Chart title as drawn in the image.
    pub title: String,
    /// PNG encoded RGB image.
    pub png: Vec<u8>,
    /// Pixel width of the image.
    pub width_px: u32,
    /// Pixel height of the image.
    pub height_px: u32,
}

impl ChartArtifact {
    /// Height divided by width, used to keep proportions when width-fitting.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width_px == 0 {
            return 0.0;
        }
        f64::from(self.height_px) / f64::from(self.width_px)
    }
}

impl fmt::Debug for ChartArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartArtifact")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("png_bytes", &self.png.len())
            .field("width_px", &self.width_px)
            .field("height_px", &self.height_px)
            .finish()
    }
}
