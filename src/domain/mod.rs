//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the shaped, date-aligned `Timeline` and its summary stats
//! - the `SeriesKind` enum naming the three tracked count series
//! - the explicit chart configuration handed to renderers (`ChartSpec`)

pub mod chart;
pub mod types;

pub use chart::*;
pub use types::*;
