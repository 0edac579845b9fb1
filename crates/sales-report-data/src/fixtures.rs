//! Scratch sales stores for tests.

use sales_report_common::{Result, SalesReportError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: [&str; 3] = [
    r"CREATE TABLE products (
        product_id INTEGER PRIMARY KEY,
        product_name TEXT NOT NULL
    )",
    r"CREATE TABLE customers (
        customer_id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL
    )",
    r"CREATE TABLE sales (
        sale_id INTEGER PRIMARY KEY AUTOINCREMENT,
        sale_date DATE NOT NULL,
        product_id INTEGER NOT NULL REFERENCES products(product_id),
        customer_id INTEGER NOT NULL REFERENCES customers(customer_id),
        quantity INTEGER NOT NULL DEFAULT 1,
        total_price REAL NOT NULL
    )",
];

/// A temporary SQLite file holding the sales schema.
///
/// The directory and the database are removed when the fixture is dropped.
pub struct SalesFixture {
    dir: TempDir,
    path: PathBuf,
    conn: SqliteConnection,
}

impl SalesFixture {
    /// Creates an empty store with the `sales`, `products` and `customers` tables.
    pub async fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sales.db");
        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .connect()
            .await?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&mut conn).await?;
        }

        Ok(Self { dir, path, conn })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the database, usable as a scratch output directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Inserts a product.
    pub async fn product(&mut self, id: i64, name: &str) -> Result<&mut Self> {
        sqlx::query("INSERT INTO products (product_id, product_name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut self.conn)
            .await?;
        Ok(self)
    }

    /// Inserts a customer.
    pub async fn customer(&mut self, id: i64, first: &str, last: &str) -> Result<&mut Self> {
        sqlx::query("INSERT INTO customers (customer_id, first_name, last_name) VALUES (?, ?, ?)")
            .bind(id)
            .bind(first)
            .bind(last)
            .execute(&mut self.conn)
            .await?;
        Ok(self)
    }

    /// Inserts a sale. `sale_date` is stored verbatim.
    pub async fn sale(
        &mut self,
        sale_date: &str,
        product_id: i64,
        customer_id: i64,
        total_price: f64,
    ) -> Result<&mut Self> {
        sqlx::query(
            "INSERT INTO sales (sale_date, product_id, customer_id, total_price) VALUES (?, ?, ?, ?)",
        )
        .bind(sale_date)
        .bind(product_id)
        .bind(customer_id)
        .bind(total_price)
        .execute(&mut self.conn)
        .await?;
        Ok(self)
    }

    /// Store with one product, one customer and the two sales from the January/February example.
    pub async fn two_month_example() -> Result<Self> {
        let mut fixture = Self::new().await?;
        fixture.product(1, "Widget").await?;
        fixture.customer(1, "Ada", "Lovelace").await?;
        fixture.sale("2024-01-05", 1, 1, 100.0).await?;
        fixture.sale("2024-02-10", 1, 1, 50.0).await?;
        Ok(fixture)
    }

    /// Store with `count` customers; customer `i` spends `(count - i) * 10`.
    pub async fn with_customers(count: i64) -> Result<Self> {
        let mut fixture = Self::new().await?;
        fixture.product(1, "Widget").await?;
        for i in 0..count {
            fixture
                .customer(i, &format!("First{i:02}"), &format!("Last{i:02}"))
                .await?;
            #[allow(clippy::cast_precision_loss)]
            let total = (count - i) as f64 * 10.0;
            fixture.sale("2024-05-01", 1, i, total).await?;
        }
        Ok(fixture)
    }

    /// Closes the writer connection, keeping the file in place.
    pub async fn finish(self) -> Result<TempStore> {
        self.conn
            .close()
            .await
            .map_err(|e| SalesReportError::database_with_source("Failed to close fixture", e))?;
        Ok(TempStore {
            dir: self.dir,
            path: self.path,
        })
    }
}

/// A finished fixture: the database file and the directory that owns it.
pub struct TempStore {
    dir: TempDir,
    path: PathBuf,
}

impl TempStore {
    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the database.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
