//! # Sales Report Common
//!
//! Shared types, errors, logging and utilities for the sales report generator.
//!
//! This crate provides the foundational types used across all other crates in
//! the workspace: the error type, the series and chart artifact model, and the
//! value formatting helpers shared by the chart renderer and the tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
pub use utils::*;
