//! # HexDrill Core
//!
//! Core types and utilities shared by the HexDrill crates:
//! fundamental geometry types, measurement parsing, and fractional
//! display of decimal sizes at a drill-increment resolution.

pub mod error;
pub mod types;
pub mod units;

pub use error::UnitError;
pub use types::Point;
pub use units::{format_fraction, parse_measurement};
