//! Scoped read-only session on the SQLite sales store.

use crate::aggregator::build_report_data;
use crate::queries::{self, DailySales};
use sales_report_common::{ReportData, Result, SalesReportError, SeriesPoint};
use sales_report_config::AggregationConfig;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Raw query results before month bucketing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesRows {
    /// Daily totals, oldest first.
    pub daily: Vec<DailySales>,
    /// Per-product totals, by product name.
    pub products: Vec<SeriesPoint>,
    /// Top customers, largest total first.
    pub customers: Vec<SeriesPoint>,
}

/// A single read-only connection to the sales store.
///
/// The connection is closed by [`SalesStore::load_report_data`] or
/// [`SalesStore::close`]; dropping the store also releases it.
pub struct SalesStore {
    conn: SqliteConnection,
    path: PathBuf,
}

impl SalesStore {
    /// Opens an existing sales store. A missing file is an error, never created.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .connect()
            .await
            .map_err(|e| {
                SalesReportError::database_with_source(
                    format!("Failed to open sales store {}", path.display()),
                    e,
                )
            })?;

        debug!("Opened sales store");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the three aggregate queries on the open connection.
    pub async fn fetch_rows(&mut self, top_customers: u32) -> Result<SalesRows> {
        let daily = queries::monthly_rows(&mut self.conn).await?;
        let products = queries::product_rows(&mut self.conn).await?;
        let customers = queries::customer_rows(&mut self.conn, top_customers).await?;

        Ok(SalesRows {
            daily,
            products,
            customers,
        })
    }

    /// Closes the connection.
    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|e| SalesReportError::database_with_source("Failed to close sales store", e))
    }

    /// Fetches every series for the report and closes the connection.
    ///
    /// The connection is closed exactly once whether or not the queries succeed;
    /// a query error is reported in preference to a close error.
    pub async fn load_report_data(mut self, config: &AggregationConfig) -> Result<ReportData> {
        let fetched = self.fetch_rows(config.top_customers_limit).await;
        let path = self.path.clone();
        let closed = self.close().await;

        let rows = fetched?;
        closed?;

        info!(
            path = %path.display(),
            days = rows.daily.len(),
            products = rows.products.len(),
            customers = rows.customers.len(),
            "Loaded sales data"
        );

        Ok(build_report_data(
            &rows.daily,
            rows.products,
            rows.customers,
            config,
        ))
    }
}
