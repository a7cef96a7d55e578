//! Temporal alignment of external series onto the weekly sales table.
//!
//! Two join policies cover the series shapes we ingest:
//!
//! - `AsOfBackward`: latest observation dated at or before each sales date
//! - `CalendarMonth`: one value per (year, month), looked up by record month
//!
//! Gaps left by the join are closed by a configurable fill pass.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    ExternalSeries, FillPolicy, JoinPolicy, MergedRecord, Observation, SalesRecord,
};

/// Merge the two external columns onto the sales table.
///
/// The output carries every input row exactly once, ordered by
/// `week_start_date` ascending with the original relative order as tie-break.
pub fn merge_external(
    sales: Vec<SalesRecord>,
    gas: &ExternalSeries,
    cpi: &ExternalSeries,
    fill: FillPolicy,
) -> Vec<MergedRecord> {
    let mut sales = sales;
    sales.sort_by_key(|r| r.week_start_date);

    let mut gas_col = join_column(&sales, gas);
    let mut cpi_col = join_column(&sales, cpi);
    fill_column(&mut gas_col, fill);
    fill_column(&mut cpi_col, fill);

    sales
        .into_iter()
        .zip(gas_col)
        .zip(cpi_col)
        .map(|((sales, avg_gas_price), cpi)| MergedRecord {
            sales,
            avg_gas_price,
            cpi,
        })
        .collect()
}

/// Resolve one external column against date-sorted sales rows.
pub fn join_column(sales_sorted: &[SalesRecord], series: &ExternalSeries) -> Vec<Option<f64>> {
    match series.policy {
        JoinPolicy::AsOfBackward => join_asof_backward(sales_sorted, &series.observations),
        JoinPolicy::CalendarMonth => join_calendar_month(sales_sorted, &series.observations),
    }
}

/// Sort ascending by date and collapse duplicate dates, last entry wins.
fn normalize_observations(observations: &[Observation]) -> Vec<Observation> {
    let mut by_date: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for obs in observations {
        by_date.insert(obs.date, obs.value);
    }
    by_date
        .into_iter()
        .map(|(date, value)| Observation { date, value })
        .collect()
}

/// Single forward pass over both sorted sequences, O(n + m).
fn join_asof_backward(
    sales_sorted: &[SalesRecord],
    observations: &[Observation],
) -> Vec<Option<f64>> {
    let obs = normalize_observations(observations);
    let mut out = Vec::with_capacity(sales_sorted.len());
    let mut next = 0;
    let mut latest: Option<Observation> = None;

    for record in sales_sorted {
        while next < obs.len() && obs[next].date <= record.week_start_date {
            latest = Some(obs[next]);
            next += 1;
        }
        out.push(latest.and_then(|o| o.value));
    }
    out
}

fn join_calendar_month(
    sales_sorted: &[SalesRecord],
    observations: &[Observation],
) -> Vec<Option<f64>> {
    // Ascending insertion keeps the most recent entry per month.
    let mut by_month: BTreeMap<(i32, u32), Option<f64>> = BTreeMap::new();
    for obs in normalize_observations(observations) {
        by_month.insert((obs.date.year(), obs.date.month()), obs.value);
    }

    sales_sorted
        .iter()
        .map(|r| {
            by_month
                .get(&(r.week_start_date.year(), r.week_start_date.month()))
                .copied()
                .flatten()
        })
        .collect()
}

/// Close the join's gaps in place. The forward pass carries the last seen
/// value; the backward pass covers slots before the first observation.
pub fn fill_column(column: &mut [Option<f64>], policy: FillPolicy) {
    if policy == FillPolicy::Off {
        return;
    }

    let mut carried = None;
    for slot in column.iter_mut() {
        match *slot {
            Some(v) => carried = Some(v),
            None => *slot = carried,
        }
    }

    if policy == FillPolicy::ForwardBackward {
        let mut carried = None;
        for slot in column.iter_mut().rev() {
            match *slot {
                Some(v) => carried = Some(v),
                None => *slot = carried,
            }
        }
    }
}
