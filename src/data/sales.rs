//! Deterministic synthetic weekly sales generation.

use chrono::{Datelike, Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::SalesRecord;
use crate::error::AppError;

pub const PRODUCT_COUNT: usize = 50;

const REGION: &str = "USA";
const UNITS_MEAN: f64 = 20.0;
const UNITS_STD: f64 = 5.0;

/// Generate one record per (week, product) over the horizon.
///
/// Identical inputs produce an identical table: all randomness comes from a
/// single `StdRng` seeded with `seed`, consumed in a fixed order per record.
pub fn generate_sales(
    start_date: NaiveDate,
    weeks: usize,
    seed: u64,
) -> Result<Vec<SalesRecord>, AppError> {
    if weeks == 0 {
        return Err(AppError::new(2, "Sales horizon must be > 0 weeks."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(UNITS_MEAN, UNITS_STD)
        .map_err(|e| AppError::new(2, format!("Units distribution error: {e}")))?;

    let mut records = Vec::with_capacity(weeks * PRODUCT_COUNT);
    for week in 0..weeks {
        let week_start_date = start_date + Duration::weeks(week as i64);
        let seasonality = week_seasonality(week_start_date.iso_week().week());

        for product in 1..=PRODUCT_COUNT {
            let unit_price = round_cents(rng.gen_range(5.0..50.0));
            let discount_percent = sample_discount(&mut rng);
            let units_sold = ((normal.sample(&mut rng) * seasonality) as i64).max(0) as u32;
            let revenue = round_cents(
                f64::from(units_sold) * unit_price * (1.0 - f64::from(discount_percent) / 100.0),
            );

            records.push(SalesRecord {
                week_start_date,
                product_id: format!("P{product:03}"),
                product_name: format!("Product_{product}"),
                units_sold,
                unit_price,
                discount_percent,
                revenue,
                region: REGION.to_string(),
            });
        }
    }

    Ok(records)
}

/// Holiday season peaks highest; summer gets a smaller lift.
fn week_seasonality(iso_week: u32) -> f64 {
    match iso_week {
        48..=52 => 1.5,
        22..=35 => 1.2,
        _ => 1.0,
    }
}

fn sample_discount(rng: &mut StdRng) -> u8 {
    let roll: f64 = rng.r#gen();
    if roll < 0.50 {
        0
    } else if roll < 0.70 {
        5
    } else if roll < 0.85 {
        10
    } else if roll < 0.95 {
        15
    } else {
        20
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_sales(start(), 4, 42).unwrap();
        let b = generate_sales(start(), 4, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn one_record_per_week_and_product() {
        let records = generate_sales(start(), 3, 42).unwrap();
        assert_eq!(records.len(), 3 * PRODUCT_COUNT);

        let mut keys: Vec<(NaiveDate, &str)> = records
            .iter()
            .map(|r| (r.week_start_date, r.product_id.as_str()))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), records.len());

        assert_eq!(records[0].product_id, "P001");
        assert_eq!(records[0].product_name, "Product_1");
        assert_eq!(records[records.len() - 1].product_id, "P050");
    }

    #[test]
    fn revenue_matches_units_price_discount() {
        let records = generate_sales(start(), 6, 7).unwrap();
        for r in &records {
            let expected = f64::from(r.units_sold)
                * r.unit_price
                * (1.0 - f64::from(r.discount_percent) / 100.0);
            assert!(
                (r.revenue - expected).abs() <= 0.005 + 1e-9,
                "revenue {} vs expected {expected} for {}",
                r.revenue,
                r.product_id
            );
            assert!(r.unit_price >= 5.0 && r.unit_price < 50.005);
            assert!(matches!(r.discount_percent, 0 | 5 | 10 | 15 | 20));
            assert_eq!(r.region, "USA");
        }
    }

    #[test]
    fn week_dates_advance_by_seven_days() {
        let records = generate_sales(start(), 3, 42).unwrap();
        let week2 = &records[PRODUCT_COUNT];
        let week3 = &records[2 * PRODUCT_COUNT];
        assert_eq!(week2.week_start_date, start() + Duration::days(7));
        assert_eq!(week3.week_start_date, start() + Duration::days(14));
    }

    #[test]
    fn empty_horizon_is_a_config_error() {
        let err = generate_sales(start(), 0, 42).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn seasonality_peaks_late_year() {
        assert_eq!(week_seasonality(48), 1.5);
        assert_eq!(week_seasonality(52), 1.5);
        assert_eq!(week_seasonality(22), 1.2);
        assert_eq!(week_seasonality(35), 1.2);
        assert_eq!(week_seasonality(10), 1.0);
        assert_eq!(week_seasonality(47), 1.0);
    }
}
