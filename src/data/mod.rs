//! Data acquisition: the FRED fetch and the synthetic sales table.

pub mod fred;
pub mod sales;

pub use fred::*;
pub use sales::*;
