//! # Sales Report PDF
//!
//! Assembles the rendered chart images into the final report: an A4 document
//! with a dated title followed by every chart, each scaled to the page width.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod elements;
pub mod fonts;

pub use assembler::*;
pub use elements::{KeepTogetherImage, TitleCell, VerticalSpace};
pub use fonts::{load_font_family, FontCandidate};
