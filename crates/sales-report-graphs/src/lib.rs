//! # Sales Report Graphs
//!
//! Renders the report's three bar charts with plotters into in-memory PNGs.
//!
//! Every chart shares one [`ChartTemplate`] and the drawing routine in
//! [`bar_chart`]; the chart modules only decide title, axis titles and how
//! their series is prepared. [`GraphManager`] renders them in report order and
//! writes each image to the output directory.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bar_chart;
pub mod manager;
pub mod template;
pub mod traits;

pub mod monthly_sales;
pub mod product_sales;
pub mod top_customers;

pub use bar_chart::*;
pub use manager::*;
pub use monthly_sales::MonthlySalesGraph;
pub use product_sales::ProductSalesGraph;
pub use template::*;
pub use top_customers::TopCustomersGraph;
pub use traits::*;
