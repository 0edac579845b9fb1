//! Runtime validation of loaded configuration.

use crate::schema::Config;
use sales_report_common::{Result, SalesReportError};

/// Upper bound on a rendered chart side, in pixels, after scaling.
pub const MAX_CHART_PIXELS: u32 = 16_384;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, returning the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        if config.database.path.as_os_str().is_empty() {
            return Err(SalesReportError::validation_field(
                "database path cannot be empty",
                "database.path",
            ));
        }

        if config.output.directory.as_os_str().is_empty() {
            return Err(SalesReportError::validation_field(
                "output directory cannot be empty",
                "output.directory",
            ));
        }

        let report_file = config.output.report_file.trim();
        if report_file.is_empty() || report_file.contains(['/', '\\']) {
            return Err(SalesReportError::validation_field(
                "report file must be a plain file name",
                "output.report_file",
            ));
        }

        let charts = &config.charts;
        if charts.width == 0 || charts.height == 0 {
            return Err(SalesReportError::validation_field(
                "chart dimensions must be positive",
                "charts.width/charts.height",
            ));
        }
        if charts.scale == 0 {
            return Err(SalesReportError::validation_field(
                "chart scale must be at least 1",
                "charts.scale",
            ));
        }
        let longest = charts.width.max(charts.height);
        if longest.checked_mul(charts.scale).map_or(true, |px| px > MAX_CHART_PIXELS) {
            return Err(SalesReportError::validation_field(
                format!("scaled chart size exceeds {MAX_CHART_PIXELS} pixels"),
                "charts.scale",
            ));
        }

        if config.aggregation.top_customers_limit == 0 {
            return Err(SalesReportError::validation_field(
                "top customers limit must be at least 1",
                "aggregation.top_customers_limit",
            ));
        }

        if config.report.font_family.is_some() && config.report.fonts_dir.is_none() {
            return Err(SalesReportError::validation_field(
                "font_family requires fonts_dir",
                "report.font_family",
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut config = Config::default();
        config.charts.scale = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scale"));
    }

    #[test]
    fn test_rejects_oversized_charts() {
        let mut config = Config::default();
        config.charts.scale = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_top_customers() {
        let mut config = Config::default();
        config.aggregation.top_customers_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(SalesReportError::Validation { field: Some(field), .. })
                if field == "aggregation.top_customers_limit"
        ));
    }

    #[test]
    fn test_rejects_report_file_with_directory() {
        let mut config = Config::default();
        config.output.report_file = "nested/report.pdf".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_font_family_requires_directory() {
        let mut config = Config::default();
        config.report.font_family = Some("LiberationSans".to_string());
        assert!(config.validate().is_err());

        config.report.fonts_dir = Some(PathBuf::from("/usr/share/fonts"));
        assert!(config.validate().is_ok());
    }
}
