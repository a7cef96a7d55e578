//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - join/fill policy enums (`JoinPolicy`, `FillPolicy`)
//! - external series points (`Observation`, `ExternalSeries`)
//! - sales and merged rows (`SalesRecord`, `MergedRecord`)
//! - audit findings and run configuration (`QualityIssue`, `PipelineConfig`)

pub mod types;

pub use types::*;
