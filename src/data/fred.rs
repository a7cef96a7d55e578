//! FRED API integration for the external macro series.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::Observation;
use crate::error::AppError;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| AppError::new(2, "Missing FRED_API_KEY in environment (.env)."))?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the full observation history for one series.
    ///
    /// Unparseable values become `None`; an unparseable date aborts the run.
    pub fn fetch_observations(&self, series_id: &str) -> Result<Vec<Observation>, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("series_id", series_id),
                ("api_key", &self.api_key),
                ("file_type", "json"),
            ])
            .send()
            .map_err(|e| AppError::new(4, format!("FRED request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                4,
                format!(
                    "FRED request for {series_id} failed with status {}.",
                    resp.status()
                ),
            ));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| AppError::new(4, format!("Failed to parse FRED response: {e}")))?;

        decode_observations(series_id, body)
    }
}

fn decode_observations(
    series_id: &str,
    body: ObservationsResponse,
) -> Result<Vec<Observation>, AppError> {
    let mut out = Vec::with_capacity(body.observations.len());
    for obs in body.observations {
        let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d").map_err(|e| {
            AppError::new(
                3,
                format!("Invalid date '{}' in series {series_id}: {e}", obs.date),
            )
        })?;
        out.push(Observation {
            date,
            value: obs.value.to_numeric(),
        });
    }
    Ok(out)
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    value: RawValue,
}

/// FRED publishes observation values as strings ("3.104", "." for missing);
/// tolerate plain JSON numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn to_numeric(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) if v.is_finite() => Some(*v),
            RawValue::Number(_) => None,
            RawValue::Text(raw) => parse_value(raw),
        }
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Vec<Observation>, AppError> {
        let body: ObservationsResponse = serde_json::from_str(json).unwrap();
        decode_observations("TEST", body)
    }

    #[test]
    fn parse_value_handles_fred_missing_marker() {
        assert_eq!(parse_value("3.104"), Some(3.104));
        assert_eq!(parse_value(" 3.104 "), Some(3.104));
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("n/a"), None);
        assert_eq!(parse_value("inf"), None);
    }

    #[test]
    fn decode_keeps_missing_values_as_null() {
        let obs = decode(
            r#"{"observations":[
                {"date":"2024-01-01","value":"3.104"},
                {"date":"2024-01-08","value":"."},
                {"date":"2024-01-15","value":3.2}
            ]}"#,
        )
        .unwrap();

        assert_eq!(obs.len(), 3);
        assert_eq!(obs[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(obs[0].value, Some(3.104));
        assert_eq!(obs[1].value, None);
        assert_eq!(obs[2].value, Some(3.2));
    }

    #[test]
    fn decode_rejects_malformed_dates() {
        let err = decode(r#"{"observations":[{"date":"01/08/2024","value":"3.1"}]}"#).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
