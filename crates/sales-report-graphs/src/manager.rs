//! Renders every report chart and writes the images to the output directory.

use crate::monthly_sales::MonthlySalesGraph;
use crate::product_sales::ProductSalesGraph;
use crate::template::ChartTemplate;
use crate::top_customers::TopCustomersGraph;
use crate::traits::GraphRenderer;
use sales_report_common::{ChartArtifact, ReportData, Result};
use sales_report_config::{AggregationConfig, ChartsConfig};
use std::fs;
use std::path::Path;
use tracing::info;

/// Owns the report's chart renderers in report order.
pub struct GraphManager {
    template: ChartTemplate,
    renderers: Vec<Box<dyn GraphRenderer>>,
}

impl GraphManager {
    /// Monthly, product and top customer charts with the presentation template.
    pub fn new(charts: &ChartsConfig, aggregation: &AggregationConfig) -> Self {
        Self {
            template: ChartTemplate::presentation(),
            renderers: vec![
                Box::new(MonthlySalesGraph::new(charts)),
                Box::new(ProductSalesGraph::new(charts)),
                Box::new(TopCustomersGraph::new(
                    charts,
                    aggregation.top_customers_limit,
                )),
            ],
        }
    }

    /// Replaces the visual template.
    #[must_use]
    pub fn with_template(mut self, template: ChartTemplate) -> Self {
        self.template = template;
        self
    }

    /// Template used for every chart.
    pub const fn template(&self) -> &ChartTemplate {
        &self.template
    }

    /// Renders all charts in report order and writes each PNG under its fixed
    /// file name, overwriting earlier runs. Creates `output_dir` if needed.
    pub fn render_all(&self, data: &ReportData, output_dir: &Path) -> Result<Vec<ChartArtifact>> {
        fs::create_dir_all(output_dir)?;

        let mut artifacts = Vec::with_capacity(self.renderers.len());
        for renderer in &self.renderers {
            let artifact = renderer.render(data, &self.template)?;
            let path = output_dir.join(artifact.kind.file_name());
            fs::write(&path, &artifact.png)?;

            info!(
                chart = %artifact.kind,
                path = %path.display(),
                bars = data.series(artifact.kind).len(),
                "Wrote chart"
            );
            artifacts.push(artifact);
        }

        Ok(artifacts)
    }
}
