//! Reporting utilities: formatted terminal output for a fetched timeline.

pub mod format;

pub use format::*;
