//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use sales_report_common::{Result, SalesReportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader bound to one TOML file.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration file.
    pub fn load(&self) -> Result<Config> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SalesReportError::config_with_source(
                format!("Failed to read config file {}", self.path.display()),
                e,
            )
        })?;

        let config = Self::parse(&content)?;
        info!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns validated defaults.
    pub fn load_or_default(&self) -> Result<Config> {
        if self.path.exists() {
            self.load()
        } else {
            debug!(path = %self.path.display(), "No config file, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration atomically by writing a sibling file and renaming it.
    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let content = toml::to_string_pretty(config).map_err(|e| {
            SalesReportError::config_with_source("Failed to serialize configuration", e)
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "Saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MonthLabelStyle;

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [aggregation]
            top_customers_limit = 5
            month_labels = "with_year"
            "#,
        )
        .unwrap();

        assert_eq!(config.aggregation.top_customers_limit, 5);
        assert_eq!(config.aggregation.month_labels, MonthLabelStyle::WithYear);
        assert_eq!(config.charts.width, 1200);
        assert_eq!(config.output.report_file, "sales_report.pdf");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = ConfigLoader::parse("[charts]\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, SalesReportError::Config { .. }));
    }

    #[test]
    fn test_parse_runs_validation() {
        let err = ConfigLoader::parse("[charts]\nscale = 0\n").unwrap_err();
        assert!(matches!(err, SalesReportError::Validation { .. }));
    }
}
