//! # Sales Report
//!
//! Generates a static sales report from a SQLite store: three bar charts
//! (monthly totals, product totals, top customers) written as PNG files and
//! assembled with a dated title into a single PDF.
//!
//! The run is a straight pipeline: query, aggregate, render, assemble. Any
//! failure stops the run and is reported to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod pipeline;

pub use cli::*;
pub use error::*;
pub use pipeline::*;
