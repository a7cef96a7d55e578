//! Post-merge quality checks.
//!
//! Three checks run on every audit, in a fixed order:
//!
//! 1. missing values anywhere in the merged table
//! 2. weekly unit totals outside the z-score threshold
//! 3. weeks whose product set differs from the table-wide set
//!
//! Findings are advisory; the audit itself never fails.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::domain::{MergedRecord, QualityIssue};

pub fn check_quality(records: &[MergedRecord], anomaly_z: f64) -> Vec<QualityIssue> {
    let mut issues = Vec::new();

    if has_missing_values(records) {
        issues.push(QualityIssue::MissingValues);
    }
    if has_weekly_anomaly(records, anomaly_z) {
        issues.push(QualityIssue::SalesAnomaly);
    }
    issues.extend(
        incomplete_weeks(records)
            .into_iter()
            .map(QualityIssue::IncompleteCoverage),
    );

    issues
}

/// The sales fields are non-nullable by construction, so only the joined
/// external columns can be missing.
fn has_missing_values(records: &[MergedRecord]) -> bool {
    records
        .iter()
        .any(|r| r.avg_gas_price.is_none() || r.cpi.is_none())
}

fn has_weekly_anomaly(records: &[MergedRecord], threshold: f64) -> bool {
    let mut weekly: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in records {
        *weekly.entry(r.sales.week_start_date).or_insert(0) += u64::from(r.sales.units_sold);
    }
    if weekly.is_empty() {
        return false;
    }

    let totals: Vec<f64> = weekly.values().map(|&t| t as f64).collect();
    let n = totals.len() as f64;
    let mean = totals.iter().sum::<f64>() / n;
    // Population variance over the observed weeks.
    let variance = totals.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    if std <= 0.0 {
        return false;
    }

    totals.iter().any(|t| ((t - mean) / std).abs() > threshold)
}

fn incomplete_weeks(records: &[MergedRecord]) -> Vec<NaiveDate> {
    let expected: BTreeSet<&str> = records
        .iter()
        .map(|r| r.sales.product_id.as_str())
        .collect();

    let mut by_week: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for r in records {
        by_week
            .entry(r.sales.week_start_date)
            .or_default()
            .insert(r.sales.product_id.as_str());
    }

    by_week
        .into_iter()
        .filter(|(_, products)| *products != expected)
        .map(|(date, _)| date)
        .collect()
}
