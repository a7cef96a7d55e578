//! Shared pipeline logic behind the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! FRED fetch -> sales synthesis -> merge -> audit
//!
//! The front-end then focuses on presentation and sinks.

use crate::data::{FredClient, generate_sales};
use crate::domain::{ExternalSeries, JoinPolicy, MergedRecord, PipelineConfig, QualityIssue};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub merged: Vec<MergedRecord>,
    pub issues: Vec<QualityIssue>,
    pub gas_points: usize,
    pub cpi_points: usize,
}

/// Execute the full pipeline, external fetches included.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunOutput, AppError> {
    let client = FredClient::from_env()?;

    let gas = ExternalSeries {
        name: "avg_gas_price".to_string(),
        policy: JoinPolicy::AsOfBackward,
        observations: client.fetch_observations(&config.gas_series_id)?,
    };
    let cpi = ExternalSeries {
        name: "cpi".to_string(),
        policy: JoinPolicy::CalendarMonth,
        observations: client.fetch_observations(&config.cpi_series_id)?,
    };

    run_pipeline_with_series(config, gas, cpi)
}

/// Execute the pipeline with pre-fetched series.
///
/// This keeps merge and audit testable without the network.
pub fn run_pipeline_with_series(
    config: &PipelineConfig,
    gas: ExternalSeries,
    cpi: ExternalSeries,
) -> Result<RunOutput, AppError> {
    let sales = generate_sales(config.start_date, config.weeks, config.seed)?;
    let gas_points = gas.observations.len();
    let cpi_points = cpi.observations.len();

    let merged = crate::merge::merge_external(sales, &gas, &cpi, config.fill);
    let issues = crate::audit::check_quality(&merged, config.anomaly_z);

    Ok(RunOutput {
        merged,
        issues,
        gas_points,
        cpi_points,
    })
}
