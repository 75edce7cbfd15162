//! Input/output helpers.
//!
//! - timeline JSON read/write (`timeline_file`)
//! - CSV export (`export`)

pub mod export;
pub mod timeline_file;

pub use export::*;
pub use timeline_file::*;
