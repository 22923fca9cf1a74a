//! Daily returns — percent change from the prior close.

use crate::domain::PriceObservation;

/// Percent change of close versus the immediately preceding close.
///
/// Index 0 has no prior observation and is `None`. A zero prior close makes
/// the division non-finite; such values are reported as `None` instead of
/// leaking NaN or infinity into downstream windows and aggregates.
pub fn daily_returns(observations: &[PriceObservation]) -> Vec<Option<f64>> {
    let mut result = Vec::with_capacity(observations.len());
    if observations.is_empty() {
        return result;
    }

    result.push(None);
    for pair in observations.windows(2) {
        let prev = pair[0].close;
        let value = (pair[1].close - prev) / prev * 100.0;
        result.push(value.is_finite().then_some(value));
    }
    result
}
