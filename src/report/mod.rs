//! Run summary formatting for terminal output.

use crate::app::pipeline::RunOutput;
use crate::domain::{PipelineConfig, QualityIssue};

/// Human-readable summary of a completed run.
pub fn format_run_summary(run: &RunOutput, config: &PipelineConfig) -> String {
    let mut out = String::new();

    out.push_str("=== rmerge - retail sales / macro series merge ===\n");
    out.push_str(&format!(
        "Horizon       : {} weeks from {}\n",
        config.weeks, config.start_date
    ));
    out.push_str(&format!("Merged rows   : {}\n", run.merged.len()));
    out.push_str(&format!(
        "Series points : {} = {}, {} = {}\n",
        config.gas_series_id, run.gas_points, config.cpi_series_id, run.cpi_points
    ));
    out.push_str(&format_issues(&run.issues));

    out
}

/// Render the issue list, or the all-clear line for a clean run.
pub fn format_issues(issues: &[QualityIssue]) -> String {
    if issues.is_empty() {
        return "Data integrity check passed.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("Issues found  : {}\n", issues.len()));
    for issue in issues {
        out.push_str(&format!("  - {issue}\n"));
    }
    out
}
