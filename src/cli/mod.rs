//! Command-line parsing for the retail/macro merge pipeline.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! merge/audit code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::domain::FillPolicy;

/// Top-level CLI. The pipeline is a single run-once command, so all options
/// live directly on the top-level parser.
#[derive(Debug, Parser)]
#[command(
    name = "rmerge",
    version,
    about = "Retail sales / macro series integration pipeline (FRED-based)"
)]
pub struct Cli {
    /// Number of weekly periods to synthesize.
    #[arg(long, default_value_t = 52)]
    pub weeks: usize,

    /// Random seed for sales synthesis.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// First week-start date of the horizon.
    #[arg(long, default_value = "2024-01-07")]
    pub start_date: NaiveDate,

    /// Output path for the merged CSV.
    #[arg(long, default_value = "merged_sales_data.csv")]
    pub output: PathBuf,

    /// Output path for the quality-issue log.
    #[arg(long, default_value = "data_quality_log.txt")]
    pub log: PathBuf,

    /// FRED series id for the weekly gas price column.
    #[arg(long, default_value = "GASREGW")]
    pub gas_series: String,

    /// FRED series id for the monthly CPI column.
    #[arg(long, default_value = "CPIAUCSL")]
    pub cpi_series: String,

    /// Gap handling for the joined external columns.
    #[arg(long, value_enum, default_value_t = FillPolicy::ForwardBackward)]
    pub fill: FillPolicy,

    /// Absolute z-score above which weekly unit totals count as anomalous.
    #[arg(long, default_value_t = 3.0)]
    pub anomaly_z: f64,
}
