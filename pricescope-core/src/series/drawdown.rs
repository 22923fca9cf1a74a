//! Drawdown — percent decline from the running peak close.

use crate::domain::PriceObservation;

/// Percent below the highest close seen so far, inclusive of the current
/// observation. Always <= 0; a new running high reads exactly 0.
///
/// Empty input yields empty output rather than a placeholder value. A peak
/// of exactly zero reads 0 instead of dividing by zero.
pub fn drawdowns(observations: &[PriceObservation]) -> Vec<f64> {
    let mut result = Vec::with_capacity(observations.len());
    let Some(first) = observations.first() else {
        return result;
    };

    let mut peak = first.close;
    for obs in observations {
        // Peak updates before the value, so a new high reads 0.
        if obs.close > peak {
            peak = obs.close;
        }
        if peak == 0.0 {
            result.push(0.0);
        } else {
            result.push((obs.close - peak) / peak * 100.0);
        }
    }
    result
}
