//! Total sales per product.

use crate::bar_chart::ChartSpec;
use crate::traits::GraphRenderer;
use sales_report_common::ChartKind;
use sales_report_config::ChartsConfig;

/// Bar chart with one bar per product that has sales.
#[derive(Debug, Clone)]
pub struct ProductSalesGraph {
    spec: ChartSpec,
}

impl ProductSalesGraph {
    /// Creates the chart with the configured dimensions.
    pub fn new(charts: &ChartsConfig) -> Self {
        Self {
            spec: ChartSpec::sales("Total Sales by Product", "Product", charts),
        }
    }
}

impl GraphRenderer for ProductSalesGraph {
    fn kind(&self) -> ChartKind {
        ChartKind::ProductSales
    }

    fn spec(&self) -> &ChartSpec {
        &self.spec
    }
}
