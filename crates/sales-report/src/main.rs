//! Main entry point for the sales report generator.

use chrono::Local;
use clap::Parser;
use sales_report::{AppResult, Cli, ReportPipeline};
use sales_report_common::init_logging;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Sales report failed");
            eprintln!("Error: {err}");
            print_error_sources(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> AppResult<()> {
    let config = cli.resolve_config()?;
    init_logging(&config.logging.to_logging_config())?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting sales report");
    let outcome = ReportPipeline::new(config)
        .run(Local::now().date_naive())
        .await?;

    for chart in &outcome.charts {
        println!("{}", chart.display());
    }
    println!("{}", outcome.report.display());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {source}");
        error = source;
    }
}
