//! Reshape nested per-series records into flat, chart-ready arrays.

use crate::models::{NormalizedSeries, SeriesRecord};
use thiserror::Error;

/// Why a payload could not be reshaped. The whole operation is atomic: on
/// the first bad field or unparseable value, nothing is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// An observation's `value` is not numeric text (the API uses markers
    /// like `"N/A"` for unavailable periods).
    #[error("series {series_id}, period {period}: value {value:?} is not a number")]
    UnparseableValue {
        series_id: String,
        period: String,
        value: String,
    },
    /// A record or observation lacks a field the reshaping needs.
    #[error("missing field `{field}` in the API payload")]
    MissingField { field: &'static str },
}

/// Flatten `series` into parallel `series_id` / `periods` / `values` arrays.
///
/// Records and their observations are walked in delivery order (newest
/// first); each observation contributes a `"{year} {periodName}"` label and
/// a parsed numeric value. Afterwards `periods` and `values` (but not
/// `series_id`) are reversed in place, so the result reads chronologically
/// ascending.
pub fn normalize(series: &[SeriesRecord]) -> Result<NormalizedSeries, NormalizationError> {
    if series.len() > 1 {
        // Flat arrays cannot stay aligned across several reversed series;
        // a single chart over such input is ambiguous.
        log::warn!(
            "payload contains {} series; the flattened period/value order is ambiguous",
            series.len()
        );
    }

    let mut series_id = Vec::new();
    let mut periods = Vec::new();
    let mut values = Vec::new();

    for record in series {
        let id = record
            .series_id
            .as_deref()
            .ok_or(NormalizationError::MissingField { field: "seriesID" })?;
        series_id.push(id.to_string());

        let data = record
            .data
            .as_deref()
            .ok_or(NormalizationError::MissingField { field: "data" })?;
        for point in data {
            let year = point
                .year
                .as_deref()
                .ok_or(NormalizationError::MissingField { field: "year" })?;
            let period_name = point
                .period_name
                .as_deref()
                .ok_or(NormalizationError::MissingField { field: "periodName" })?;
            let raw = point
                .value
                .as_deref()
                .ok_or(NormalizationError::MissingField { field: "value" })?;

            let period = format!("{} {}", year, period_name);
            let value: f64 =
                raw.trim()
                    .parse()
                    .map_err(|_| NormalizationError::UnparseableValue {
                        series_id: id.to_string(),
                        period: period.clone(),
                        value: raw.to_string(),
                    })?;
            periods.push(period);
            values.push(value);
        }
    }

    periods.reverse();
    values.reverse();

    Ok(NormalizedSeries {
        series_id,
        periods,
        values,
    })
}
