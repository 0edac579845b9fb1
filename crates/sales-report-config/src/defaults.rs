//! Default values reproducing the stock report layout.

use crate::schema::*;
use sales_report_common::LogFormat;
use std::path::PathBuf;

/// Default location of the sales store.
pub const DEFAULT_DATABASE_PATH: &str = "sales.db";
/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default report file name.
pub const DEFAULT_REPORT_FILE: &str = "sales_report.pdf";
/// Logical chart width.
pub const DEFAULT_CHART_WIDTH: u32 = 1200;
/// Logical chart height.
pub const DEFAULT_CHART_HEIGHT: u32 = 400;
/// Chart supersampling factor.
pub const DEFAULT_CHART_SCALE: u32 = 4;
/// Customers in the top customers chart.
pub const DEFAULT_TOP_CUSTOMERS: u32 = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            output: OutputConfig::default(),
            charts: ChartsConfig::default(),
            aggregation: AggregationConfig::default(),
            report: ReportConfig::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_file: DEFAULT_REPORT_FILE.to_string(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            scale: DEFAULT_CHART_SCALE,
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            fill_empty_months: false,
            month_labels: MonthLabelStyle::Abbreviated,
            top_customers_limit: DEFAULT_TOP_CUSTOMERS,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fonts_dir: None,
            font_family: None,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            file: None,
        }
    }
}
