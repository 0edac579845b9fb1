//! # Sales Report Data
//!
//! Reads the `sales`, `products` and `customers` tables of a SQLite sales store
//! and turns the raw aggregates into the series drawn by the chart renderer.
//!
//! The store is opened read-only for the duration of one [`SalesStore::load_report_data`]
//! call; the connection is released before the function returns, whether or not
//! the queries succeeded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod queries;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;

pub use aggregator::*;
pub use queries::{parse_sale_date, DailySales};
pub use store::*;
