//! Output sinks.
//!
//! - merged dataset CSV (`export`)
//! - quality-issue log (`log`)

pub mod export;
pub mod log;

pub use export::*;
pub use log::*;
