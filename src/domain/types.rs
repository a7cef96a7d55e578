//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during merging and auditing
//! - exported to CSV
//! - rendered into the issue log and run summary

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How an external series aligns onto the weekly sales axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinPolicy {
    /// Latest observation dated at or before each sales date.
    AsOfBackward,
    /// One value per calendar (year, month), looked up by the record's month.
    CalendarMonth,
}

/// Gap handling applied per external column after the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FillPolicy {
    /// Forward-fill, then backward-fill what the forward pass left open.
    ForwardBackward,
    /// Forward-fill only.
    Forward,
    /// Leave gaps as nulls.
    Off,
}

/// One dated point of an external series.
///
/// A missing source value (FRED publishes `"."`) is `None`, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// A named external series tagged with its join policy.
#[derive(Debug, Clone)]
pub struct ExternalSeries {
    pub name: String,
    pub policy: JoinPolicy,
    pub observations: Vec<Observation>,
}

/// One synthetic weekly sales row.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub week_start_date: NaiveDate,
    pub product_id: String,
    pub product_name: String,
    pub units_sold: u32,
    pub unit_price: f64,
    /// One of {0, 5, 10, 15, 20}.
    pub discount_percent: u8,
    pub revenue: f64,
    pub region: String,
}

/// A sales row enriched with the joined external columns.
///
/// External values are `None` only when the series had no usable observation
/// even after the fill pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub sales: SalesRecord,
    pub avg_gas_price: Option<f64>,
    pub cpi: Option<f64>,
}

/// Advisory findings from the quality audit. Reported, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityIssue {
    MissingValues,
    SalesAnomaly,
    IncompleteCoverage(NaiveDate),
}

impl std::fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityIssue::MissingValues => write!(f, "Missing values detected."),
            QualityIssue::SalesAnomaly => write!(f, "Anomalies detected in weekly sales."),
            QualityIssue::IncompleteCoverage(date) => write!(f, "Missing products on {date}"),
        }
    }
}

/// Resolved run configuration (CLI defaults already applied).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub weeks: usize,
    pub seed: u64,
    pub start_date: NaiveDate,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
    pub gas_series_id: String,
    pub cpi_series_id: String,
    pub fill: FillPolicy,
    pub anomaly_z: f64,
}
