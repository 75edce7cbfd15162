//! Remote data sources.

pub mod disease_sh;

pub use disease_sh::*;
