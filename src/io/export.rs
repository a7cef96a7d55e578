//! Merged dataset export to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::MergedRecord;
use crate::error::AppError;

/// Write the merged table to a CSV file.
///
/// Money fields are rendered at 2 decimals, series values at 3 (FRED
/// publishes 3). Null external values become empty cells.
pub fn write_merged_csv(path: &Path, records: &[MergedRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create output CSV '{}': {e}", path.display()))
    })?;

    writeln!(
        file,
        "week_start_date,product_id,product_name,units_sold,unit_price,discount_percent,revenue,region,avg_gas_price,cpi"
    )
    .map_err(|e| AppError::new(2, format!("Failed to write output CSV header: {e}")))?;

    for r in records {
        let s = &r.sales;
        writeln!(
            file,
            "{},{},{},{},{:.2},{},{:.2},{},{},{}",
            s.week_start_date,
            s.product_id,
            s.product_name,
            s.units_sold,
            s.unit_price,
            s.discount_percent,
            s.revenue,
            s.region,
            r.avg_gas_price.map(|v| format!("{v:.3}")).unwrap_or_default(),
            r.cpi.map(|v| format!("{v:.3}")).unwrap_or_default(),
        )
        .map_err(|e| AppError::new(2, format!("Failed to write output CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SalesRecord;
    use chrono::NaiveDate;

    fn record(gas: Option<f64>, cpi: Option<f64>) -> MergedRecord {
        MergedRecord {
            sales: SalesRecord {
                week_start_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
                product_id: "P001".to_string(),
                product_name: "Product_1".to_string(),
                units_sold: 18,
                unit_price: 12.5,
                discount_percent: 10,
                revenue: 202.5,
                region: "USA".to_string(),
            },
            avg_gas_price: gas,
            cpi,
        }
    }

    #[test]
    fn round_trip_preserves_rows_and_cells() {
        let path = std::env::temp_dir().join(format!("rmerge-export-{}.csv", std::process::id()));
        let records = vec![record(Some(3.104), Some(310.326)), record(Some(3.2), None)];

        write_merged_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header = reader.headers().unwrap().clone();
        assert_eq!(
            header.iter().collect::<Vec<_>>(),
            vec![
                "week_start_date",
                "product_id",
                "product_name",
                "units_sold",
                "unit_price",
                "discount_percent",
                "revenue",
                "region",
                "avg_gas_price",
                "cpi"
            ]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        assert_eq!(&rows[0][0], "2024-01-07");
        assert_eq!(&rows[0][1], "P001");
        assert_eq!(&rows[0][3], "18");
        assert!((rows[0][4].parse::<f64>().unwrap() - 12.5).abs() < 1e-9);
        assert!((rows[0][6].parse::<f64>().unwrap() - 202.5).abs() < 1e-9);
        assert!((rows[0][8].parse::<f64>().unwrap() - 3.104).abs() < 1e-9);
        assert!((rows[0][9].parse::<f64>().unwrap() - 310.326).abs() < 1e-9);

        // Null external value renders as an empty cell.
        assert_eq!(&rows[1][9], "");

        std::fs::remove_file(&path).unwrap();
    }
}
