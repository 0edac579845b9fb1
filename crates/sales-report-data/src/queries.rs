//! The three aggregate queries run against the sales store.

use chrono::{NaiveDate, NaiveDateTime};
use sales_report_common::{Result, SalesReportError, SeriesPoint};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use tracing::debug;

/// Daily totals, oldest first.
pub const MONTHLY_SQL: &str = r"
    SELECT sale_date, CAST(SUM(total_price) AS REAL) AS total_sales
    FROM sales
    GROUP BY sale_date
    ORDER BY sale_date ASC
";

/// Totals per product name.
pub const PRODUCT_SQL: &str = r"
    SELECT p.product_name AS product_name, CAST(SUM(s.total_price) AS REAL) AS total_sales
    FROM sales s
    JOIN products p ON s.product_id = p.product_id
    GROUP BY p.product_name
    ORDER BY p.product_name ASC
";

/// Totals per customer full name, largest first, limited to the top N.
pub const CUSTOMER_SQL: &str = r"
    SELECT c.first_name || ' ' || c.last_name AS customer_name,
           CAST(SUM(s.total_price) AS REAL) AS total_sales
    FROM sales s
    JOIN customers c ON s.customer_id = c.customer_id
    GROUP BY customer_name
    ORDER BY total_sales DESC, customer_name ASC
    LIMIT ?
";

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Summed sales for one distinct `sale_date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySales {
    /// Calendar date of the sales.
    pub sale_date: NaiveDate,
    /// Sum of `total_price` on that date.
    pub total_sales: f64,
}

impl DailySales {
    /// Creates a daily total.
    pub const fn new(sale_date: NaiveDate, total_sales: f64) -> Self {
        Self {
            sale_date,
            total_sales,
        }
    }
}

/// Parses a stored `sale_date`: `YYYY-MM-DD`, optionally followed by a time of day.
pub fn parse_sale_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| SalesReportError::data(format!("Unrecognised sale_date '{raw}'")))
}

fn series_point(row: &SqliteRow, label_column: &str) -> Result<SeriesPoint> {
    let label: Option<String> = row.try_get(label_column)?;
    let total: Option<f64> = row.try_get("total_sales")?;
    Ok(SeriesPoint::new(label.unwrap_or_default(), total.unwrap_or(0.0)))
}

/// Runs the daily totals query.
pub async fn monthly_rows(conn: &mut SqliteConnection) -> Result<Vec<DailySales>> {
    let rows = sqlx::query(MONTHLY_SQL)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| SalesReportError::database_with_source("Daily sales query failed", e))?;

    let mut daily = Vec::with_capacity(rows.len());
    for row in rows {
        let raw: Option<String> = row.try_get("sale_date")?;
        let raw = raw.ok_or_else(|| SalesReportError::data("Sale without a sale_date"))?;
        let total: Option<f64> = row.try_get("total_sales")?;
        daily.push(DailySales::new(parse_sale_date(&raw)?, total.unwrap_or(0.0)));
    }

    debug!(rows = daily.len(), "Fetched daily sales");
    Ok(daily)
}

/// Runs the per-product totals query.
pub async fn product_rows(conn: &mut SqliteConnection) -> Result<Vec<SeriesPoint>> {
    let rows = sqlx::query(PRODUCT_SQL)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| SalesReportError::database_with_source("Product sales query failed", e))?;

    let points = rows
        .iter()
        .map(|row| series_point(row, "product_name"))
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = points.len(), "Fetched product sales");
    Ok(points)
}

/// Runs the top customers query, returning at most `limit` rows.
pub async fn customer_rows(conn: &mut SqliteConnection, limit: u32) -> Result<Vec<SeriesPoint>> {
    let rows = sqlx::query(CUSTOMER_SQL)
        .bind(i64::from(limit))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| SalesReportError::database_with_source("Customer sales query failed", e))?;

    let points = rows
        .iter()
        .map(|row| series_point(row, "customer_name"))
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = points.len(), limit, "Fetched top customers");
    Ok(points)
}
