//! Summary statistics — descriptive aggregates over an enriched dataset.
//!
//! Every aggregate is a pure scan of the enriched sequence; nothing here
//! feeds back into derivation. These are historical descriptions only, not
//! inference.

use crate::domain::EnrichedObservation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub observations: usize,
    pub first_close: f64,
    pub last_close: f64,
    /// Percent change from first to last close.
    pub total_return: f64,
    pub high: f64,
    pub low: f64,
    /// Minimum of the drawdown series (the deepest excursion), <= 0.
    pub max_drawdown: f64,
    /// Mean of the defined volatility values; `None` if no window ever filled.
    pub avg_volatility: Option<f64>,
}

impl SummaryStats {
    /// Compute all aggregates. Returns `None` for an empty dataset.
    pub fn compute(observations: &[EnrichedObservation]) -> Option<Self> {
        let first = observations.first()?;
        let last = observations.last()?;

        Some(Self {
            start_date: first.date,
            end_date: last.date,
            observations: observations.len(),
            first_close: first.close,
            last_close: last.close,
            total_return: total_return(first.close, last.close),
            high: observations.iter().map(|o| o.close).fold(first.close, f64::max),
            low: observations.iter().map(|o| o.close).fold(first.close, f64::min),
            max_drawdown: observations.iter().map(|o| o.drawdown).fold(0.0, f64::min),
            avg_volatility: avg_volatility(observations),
        })
    }
}

/// Percent change from first to last close. Returns 0.0 when the first
/// close is zero.
fn total_return(first: f64, last: f64) -> f64 {
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}

/// Mean of the defined volatility values, `None` if there are none.
fn avg_volatility(observations: &[EnrichedObservation]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in observations.iter().filter_map(|o| o.volatility20) {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
