//! # Sales Report Config
//!
//! Type-safe configuration for the sales report generator.
//!
//! Every setting has a default that reproduces the stock behaviour: read
//! `sales.db`, write into `output/`, render 1200x400 charts at 4x scale. A TOML
//! file only needs to name the values it changes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
