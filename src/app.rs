//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - fetches the external series and synthesizes sales
//! - merges and audits the result
//! - prints the run summary
//! - writes the issue log and the merged CSV

use clap::Parser;

use crate::cli::Cli;
use crate::domain::PipelineConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rmerge` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = pipeline_config_from_args(&cli);

    let run = pipeline::run_pipeline(&config)?;

    println!("{}", crate::report::format_run_summary(&run, &config));

    // Log first, then the dataset.
    crate::io::log::write_issue_log(&config.log_path, &run.issues)?;
    crate::io::export::write_merged_csv(&config.output_path, &run.merged)?;

    Ok(())
}

pub fn pipeline_config_from_args(args: &Cli) -> PipelineConfig {
    PipelineConfig {
        weeks: args.weeks,
        seed: args.seed,
        start_date: args.start_date,
        output_path: args.output.clone(),
        log_path: args.log.clone(),
        gas_series_id: args.gas_series.clone(),
        cpi_series_id: args.cpi_series.clone(),
        fill: args.fill,
        anomaly_z: args.anomaly_z,
    }
}
