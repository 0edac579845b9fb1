//! The report run: query, aggregate, render, assemble.

use crate::error::AppResult;
use chrono::NaiveDate;
use sales_report_common::ChartArtifact;
use sales_report_config::Config;
use sales_report_data::SalesStore;
use sales_report_graphs::GraphManager;
use sales_report_pdf::ReportAssembler;
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Files produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Chart images in report order.
    pub charts: Vec<PathBuf>,
    /// The PDF report.
    pub report: PathBuf,
}

/// One report generation run over a resolved configuration.
pub struct ReportPipeline {
    config: Config,
}

impl ReportPipeline {
    /// Creates a pipeline.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every stage in sequence. The title carries `report_date`.
    ///
    /// The sales store connection is released before rendering starts. Nothing
    /// is cleaned up on failure: files written by earlier stages stay in place.
    #[instrument(skip_all, fields(database = %self.config.database.path.display()))]
    pub async fn run(&self, report_date: NaiveDate) -> AppResult<ReportOutcome> {
        let output_dir = &self.config.output.directory;
        fs::create_dir_all(output_dir)?;

        info!("Querying sales store");
        let store = SalesStore::open(&self.config.database.path).await?;
        let data = store.load_report_data(&self.config.aggregation).await?;

        info!("Rendering charts");
        let graphs = GraphManager::new(&self.config.charts, &self.config.aggregation);
        let artifacts = graphs.render_all(&data, output_dir)?;

        info!("Assembling report");
        let report = self.config.output.report_path();
        ReportAssembler::from_config(&self.config.report)?.write(&artifacts, report_date, &report)?;

        let outcome = ReportOutcome {
            charts: chart_paths(&artifacts, output_dir),
            report,
        };
        info!(report = %outcome.report.display(), "Sales report complete");
        Ok(outcome)
    }
}

fn chart_paths(artifacts: &[ChartArtifact], output_dir: &std::path::Path) -> Vec<PathBuf> {
    artifacts
        .iter()
        .map(|artifact| output_dir.join(artifact.kind.file_name()))
        .collect()
}
