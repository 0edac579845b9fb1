//! Total sales per calendar month.

use crate::bar_chart::ChartSpec;
use crate::traits::GraphRenderer;
use sales_report_common::ChartKind;
use sales_report_config::ChartsConfig;

/// Bar chart of monthly totals, one bar per month bucket in chronological order.
#[derive(Debug, Clone)]
pub struct MonthlySalesGraph {
    spec: ChartSpec,
}

impl MonthlySalesGraph {
    /// Creates the chart with the configured dimensions.
    pub fn new(charts: &ChartsConfig) -> Self {
        Self {
            spec: ChartSpec::sales("Total Sales by Month", "Month", charts),
        }
    }
}

impl GraphRenderer for MonthlySalesGraph {
    fn kind(&self) -> ChartKind {
        ChartKind::MonthlySales
    }

    fn spec(&self) -> &ChartSpec {
        &self.spec
    }
}
