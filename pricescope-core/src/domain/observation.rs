//! Price observations — the fundamental dataset unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day: calendar date plus closing price.
///
/// The date is the ordering key. After ingestion the sequence is sorted by
/// date ascending; duplicate dates pass through unmerged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceObservation {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A price observation plus the derived series values for that day.
///
/// Derived fields are `None` until their trailing window is full — there is
/// no NaN sentinel anywhere in the enriched output. Drawdown is the
/// exception: the running peak includes the current close, so it is defined
/// at every index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedObservation {
    pub date: NaiveDate,
    pub close: f64,
    /// 20-day simple moving average of close.
    pub ma20: Option<f64>,
    /// 50-day simple moving average of close.
    pub ma50: Option<f64>,
    /// Percent change from the prior close.
    pub daily_return: Option<f64>,
    /// Percent decline from the running peak close, always <= 0.
    pub drawdown: f64,
    /// Annualized 20-day rolling volatility of daily returns, percent.
    pub volatility20: Option<f64>,
}

impl EnrichedObservation {
    /// Strip the derived fields back down to the raw observation.
    pub fn observation(&self) -> PriceObservation {
        PriceObservation {
            date: self.date,
            close: self.close,
        }
    }
}
