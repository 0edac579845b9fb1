//! Command line interface.

use crate::error::{AppError, AppResult};
use clap::Parser;
use sales_report_config::{Config, ConfigLoader};
use std::path::PathBuf;
use tracing::debug;

/// Generates the sales report PDF and chart images from a SQLite sales store.
///
/// Without arguments reads `sales.db` from the working directory and writes
/// into `output/`.
#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// TOML configuration file. Without it the built-in defaults apply.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// SQLite sales store, overriding the configuration.
    #[arg(short, long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Output directory for charts and report, overriding the configuration.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log level filter, overriding the configuration. `RUST_LOG` still wins.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Loads the configuration file and applies the command line overrides.
    ///
    /// No file is read unless `--config` names one, and that file must exist.
    pub fn resolve_config(&self) -> AppResult<Config> {
        let config = match &self.config {
            Some(path) => ConfigLoader::new(path).load()?,
            None => Config::default(),
        };
        self.apply_overrides(config)
    }

    /// Applies the command line overrides to a loaded configuration.
    pub fn apply_overrides(&self, mut config: Config) -> AppResult<Config> {
        if let Some(database) = &self.database {
            config = config.with_database_path(database);
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_directory(output_dir);
        }
        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(AppError::Arguments("--log-level cannot be empty".to_string()));
            }
            config.logging.level.clone_from(level);
        }

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_arguments_means_defaults() {
        let cli = Cli::try_parse_from(["sales-report"]).unwrap();
        assert!(cli.config.is_none());

        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_without_config_flag_no_file_is_read() {
        let config = Cli::default().resolve_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_replace_paths() {
        let cli = Cli::try_parse_from([
            "sales-report",
            "--database",
            "/data/shop.db",
            "-o",
            "/tmp/out",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config.database.path, Path::new("/data/shop.db"));
        assert_eq!(config.output.directory, Path::new("/tmp/out"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let cli = Cli {
            log_level: Some("  ".to_string()),
            ..Cli::default()
        };
        assert!(matches!(
            cli.apply_overrides(Config::default()),
            Err(AppError::Arguments(_))
        ));
    }

    #[test]
    fn test_explicit_missing_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("missing.toml")),
            ..Cli::default()
        };
        assert!(matches!(cli.resolve_config(), Err(AppError::Report(_))));
    }

    #[test]
    fn test_config_file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.toml");
        std::fs::write(
            &path,
            "[database]\npath = \"from-file.db\"\n\n[aggregation]\ntop_customers_limit = 3\n",
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            output_dir: Some(dir.path().join("out")),
            ..Cli::default()
        };
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.database.path, Path::new("from-file.db"));
        assert_eq!(config.aggregation.top_customers_limit, 3);
        assert_eq!(config.output.directory, dir.path().join("out"));
    }
}
