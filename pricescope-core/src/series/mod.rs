//! Derived series over a sorted price sequence.
//!
//! Four derivations, each a pure function over the full ordered sequence:
//! moving average, daily returns, drawdown, and rolling annualized
//! volatility. [`enrich`] runs all four and zips the results per
//! observation.
//!
//! Unavailable values are `None`, never NaN sentinels, so downstream
//! aggregates can fold over defined values without guard checks.

pub mod drawdown;
pub mod moving_average;
pub mod returns;
pub mod volatility;

pub use drawdown::drawdowns;
pub use moving_average::moving_average;
pub use returns::daily_returns;
pub use volatility::{rolling_volatility, TRADING_DAYS_PER_YEAR};

use crate::domain::{EnrichedObservation, PriceObservation};

/// Short moving-average window.
pub const MA_SHORT: usize = 20;
/// Long moving-average window.
pub const MA_LONG: usize = 50;
/// Rolling volatility window.
pub const VOLATILITY_WINDOW: usize = 20;

/// Enrich a sorted price sequence with the four derived series.
///
/// Pure, total, and length-preserving; empty input yields empty output.
/// The daily-return series is computed once and feeds both the per-day
/// return field and the volatility windows. Derivation runs over the full
/// sorted sequence — later windows depend on earlier observations, so this
/// never happens incrementally during ingestion.
pub fn enrich(observations: &[PriceObservation]) -> Vec<EnrichedObservation> {
    let ma20 = moving_average(observations, MA_SHORT);
    let ma50 = moving_average(observations, MA_LONG);
    let returns = daily_returns(observations);
    let drawdown = drawdowns(observations);
    let volatility = rolling_volatility(&returns, VOLATILITY_WINDOW);

    observations
        .iter()
        .enumerate()
        .map(|(i, obs)| EnrichedObservation {
            date: obs.date,
            close: obs.close,
            ma20: ma20[i],
            ma50: ma50[i],
            daily_return: returns[i],
            drawdown: drawdown[i],
            volatility20: volatility[i],
        })
        .collect()
}

/// Create observations from close prices for testing, one per calendar day.
#[cfg(test)]
pub fn make_observations(closes: &[f64]) -> Vec<PriceObservation> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceObservation {
            date: base_date + chrono::Duration::days(i as i64),
            close,
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for series tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
