//! Top customers by total sales.

use crate::bar_chart::ChartSpec;
use crate::traits::GraphRenderer;
use sales_report_common::{ChartKind, ReportData, SeriesPoint};
use sales_report_config::ChartsConfig;

/// Bar chart of the largest customers, descending.
#[derive(Debug, Clone)]
pub struct TopCustomersGraph {
    spec: ChartSpec,
    limit: usize,
}

impl TopCustomersGraph {
    /// Creates the chart showing at most `limit` customers.
    pub fn new(charts: &ChartsConfig, limit: u32) -> Self {
        Self {
            spec: ChartSpec::sales("Top Customers by Sales", "Customer", charts),
            limit: usize::try_from(limit).unwrap_or(usize::MAX),
        }
    }

    /// Maximum number of bars.
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl GraphRenderer for TopCustomersGraph {
    fn kind(&self) -> ChartKind {
        ChartKind::CustomerSales
    }

    fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Sorts descending (stable, so equal totals keep their query order) and keeps the top `limit`.
    fn prepare(&self, data: &ReportData) -> Vec<SeriesPoint> {
        let mut customers = data.customers.clone();
        customers.sort_by(|a, b| b.value.total_cmp(&a.value));
        customers.truncate(self.limit);
        customers
    }
}
