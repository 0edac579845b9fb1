//! Configuration schema definitions using serde.

use sales_report_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for the sales report generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sales store location.
    pub database: DatabaseConfig,
    /// Output locations.
    pub output: OutputConfig,
    /// Chart dimensions.
    pub charts: ChartsConfig,
    /// Aggregation options.
    pub aggregation: AggregationConfig,
    /// Report document options.
    pub report: ReportConfig,
    /// Logging options.
    pub logging: LoggingSection,
}

/// Sales store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path of the SQLite file holding `sales`, `products` and `customers`.
    pub path: PathBuf,
}

/// Output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the chart images and the report. Created if absent.
    pub directory: PathBuf,
    /// File name of the PDF report inside `directory`.
    pub report_file: String,
}

impl OutputConfig {
    /// Full path of the PDF report.
    pub fn report_path(&self) -> PathBuf {
        self.directory.join(&self.report_file)
    }
}

/// Chart dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartsConfig {
    /// Logical width.
    pub width: u32,
    /// Logical height.
    pub height: u32,
    /// Supersampling factor applied to width, height and fonts.
    pub scale: u32,
}

/// How month buckets are labelled on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthLabelStyle {
    /// Short month name only, e.g. `Jan`.
    #[default]
    Abbreviated,
    /// Short month name and year, e.g. `Jan 2024`.
    WithYear,
}

/// Aggregation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregationConfig {
    /// Emit zero-valued buckets for months without sales between the first and last month.
    pub fill_empty_months: bool,
    /// Month label style.
    pub month_labels: MonthLabelStyle,
    /// Number of customers shown in the top customers chart.
    pub top_customers_limit: u32,
}

/// Report document options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory holding a TrueType family for the PDF. System locations are searched when unset.
    pub fonts_dir: Option<PathBuf>,
    /// Family name of the fonts in `fonts_dir` (files `<family>-Regular.ttf`, `<family>-Bold.ttf`, ...).
    pub font_family: Option<String>,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Level filter; `RUST_LOG` takes precedence.
    pub level: String,
    /// Line format.
    pub format: LogFormat,
    /// Optional log file.
    pub file: Option<PathBuf>,
}

impl LoggingSection {
    /// Converts the section into the logger configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Overrides the database path.
    pub fn with_database_path(mut self, path: impl AsRef<Path>) -> Self {
        self.database.path = path.as_ref().to_path_buf();
        self
    }

    /// Overrides the output directory.
    pub fn with_output_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.output.directory = directory.as_ref().to_path_buf();
        self
    }
}
