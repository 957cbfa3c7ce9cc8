use crate::models::NormalizedSeries;
use serde::{Deserialize, Serialize};

/// Summary statistics over one normalized series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Compute summary statistics over the normalized values.
///
/// Returns `None` when the series has no observations.
pub fn summary(series: &NormalizedSeries) -> Option<Summary> {
    if series.values.is_empty() {
        return None;
    }
    let mut vals = series.values.clone();
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let min = vals[0];
    let max = vals[count - 1];
    let mean = vals.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        vals[count / 2]
    } else {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    };
    Some(Summary {
        count,
        min,
        max,
        mean,
        median,
    })
}
