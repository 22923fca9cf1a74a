//! Rolling annualized volatility of daily returns.
//!
//! Population standard deviation over a trailing window of daily returns,
//! scaled by sqrt(252) to approximate yearly variability.

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized volatility over the trailing `period` daily returns.
///
/// Defined at index `i` only when every return in `[i - period + 1, i]` is
/// defined; index 0 never has a return, so the earliest defined value sits
/// at index `period`. A window containing any undefined return is wholly
/// undefined — never computed from a partial window. Variance is the
/// population form (divide by `period`).
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn rolling_volatility(returns: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "volatility period must be >= 1");
    let n = returns.len();
    let mut result = vec![None; n];
    let annualization = TRADING_DAYS_PER_YEAR.sqrt();

    for i in period..n {
        let window = &returns[i + 1 - period..=i];
        if window.iter().any(|r| r.is_none()) {
            continue;
        }
        let mean = window.iter().copied().flatten().sum::<f64>() / period as f64;
        let variance = window
            .iter()
            .copied()
            .flatten()
            .map(|r| (r - mean).powi(2))
            .sum::<f64>()
            / period as f64;
        result[i] = Some(variance.sqrt() * annualization);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{assert_approx, daily_returns, make_observations};

    #[test]
    fn empty_input() {
        assert!(rolling_volatility(&[], 20).is_empty());
    }

    #[test]
    fn undefined_until_window_of_returns_fills() {
        // 20 observations → 19 defined returns → never enough for period 20.
        let closes: Vec<f64> = (1..=20).map(|i| 100.0 + i as f64).collect();
        let returns = daily_returns(&make_observations(&closes));
        let result = rolling_volatility(&returns, 20);
        assert!(result.iter().all(|v| v.is_none()));
    }

    #[test]
    fn first_defined_value_at_index_period() {
        // 21 observations → 20 defined returns → exactly one full window.
        let closes: Vec<f64> = (1..=21).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        let returns = daily_returns(&make_observations(&closes));
        let result = rolling_volatility(&returns, 20);

        for i in 0..20 {
            assert!(result[i].is_none(), "expected None at index {i}");
        }
        assert!(result[20].is_some());
    }

    #[test]
    fn matches_population_std_dev() {
        let returns = vec![None, Some(1.0), Some(3.0)];
        let result = rolling_volatility(&returns, 2);

        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        // mean 2, population variance ((1-2)^2 + (3-2)^2) / 2 = 1, std 1
        assert_approx(result[2].unwrap(), TRADING_DAYS_PER_YEAR.sqrt(), 1e-10);
    }

    #[test]
    fn twenty_one_observations_match_hand_computed_std() {
        let closes: Vec<f64> = (0..21).map(|i| 100.0 + (i as f64 * 1.3).sin() * 5.0).collect();
        let returns = daily_returns(&make_observations(&closes));
        let result = rolling_volatility(&returns, 20);

        let window: Vec<f64> = returns[1..=20].iter().map(|r| r.unwrap()).collect();
        let mean = window.iter().sum::<f64>() / 20.0;
        let variance = window.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / 20.0;
        let expected = variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt();
        assert_approx(result[20].unwrap(), expected, 1e-10);
    }

    #[test]
    fn constant_returns_have_zero_volatility() {
        let returns = vec![None, Some(0.5), Some(0.5), Some(0.5)];
        let result = rolling_volatility(&returns, 2);
        assert_approx(result[2].unwrap(), 0.0, 1e-12);
        assert_approx(result[3].unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn undefined_return_voids_every_window_containing_it() {
        let returns = vec![None, Some(1.0), None, Some(2.0), Some(3.0), Some(4.0)];
        let result = rolling_volatility(&returns, 2);

        assert_eq!(result[2], None); // window [Some, None]
        assert_eq!(result[3], None); // window [None, Some]
        assert!(result[4].is_some()); // window [Some(2), Some(3)]
        assert!(result[5].is_some());
    }
}
