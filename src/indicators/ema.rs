// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent closes, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   k      = 2 / (period + 1)
//   EMA_t  = (close_t - EMA_{t-1}) * k + EMA_{t-1}
//
// The very first EMA value is seeded with the SMA of the first `period`
// closes, which anchors the recursion without an undefined prior EMA.

use crate::types::{MaPoint, PricePoint};

/// Compute the EMA series for `data` and look-back `period`.
///
/// The seed point shares its index and timestamp with the first SMA point,
/// and each later point advances one sample, so the output length follows
/// the same `data.len() - period + 1` formula as the SMA.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `data.len() < period` => empty vec
/// - Non-finite closes propagate through the recurrence untouched; the
///   output length never changes.
pub fn calculate_ema(data: &[PricePoint], period: usize) -> Vec<MaPoint> {
    if period == 0 || data.len() < period {
        return Vec::new();
    }

    // Multiplier computed once per call.
    let k = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` closes.
    let seed: f64 = data[..period].iter().map(|p| p.close).sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(data.len() - period + 1);
    result.push(MaPoint {
        time: data[period - 1].time,
        value: seed,
    });

    let mut prev = seed;
    for point in &data[period..] {
        let ema = (point.close - prev) * k + prev;
        result.push(MaPoint {
            time: point.time,
            value: ema,
        });
        prev = ema;
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::sma::calculate_sma;

    /// Helper: build a series with 1-based integer times.
    fn points(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new((i + 1) as f64, c))
            .collect()
    }

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).is_empty());
    }

    #[test]
    fn ema_period_zero() {
        assert!(calculate_ema(&points(&[1.0, 2.0, 3.0]), 0).is_empty());
    }

    #[test]
    fn ema_insufficient_data() {
        assert!(calculate_ema(&points(&[1.0, 2.0]), 5).is_empty());
    }

    #[test]
    fn ema_period_equals_length() {
        // Single point: just the SMA seed, (2+4+6)/3 = 4.0 at time 3.
        let ema = calculate_ema(&points(&[2.0, 4.0, 6.0]), 3);
        assert_eq!(ema.len(), 1);
        assert!((ema[0].time - 3.0).abs() < 1e-12);
        assert!((ema[0].value - 4.0).abs() < 1e-10);
    }

    #[test]
    fn ema_seed_matches_sma() {
        let data = points(&[10.0, 11.0, 13.0, 12.0, 14.0, 15.0]);
        for period in 1..=data.len() {
            let ema = calculate_ema(&data, period);
            let sma = calculate_sma(&data, period);
            assert!(
                (ema[0].value - sma[0].value).abs() < 1e-12,
                "seed mismatch for period {period}"
            );
            assert!((ema[0].time - sma[0].time).abs() < 1e-12);
        }
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..=10]: seed SMA = 3.0, k = 2/6 = 1/3.
        let data = points(&(1..=10).map(|x| x as f64).collect::<Vec<_>>());
        let ema = calculate_ema(&data, 5);
        assert_eq!(ema.len(), 6);

        let k = 2.0 / 6.0;
        let mut expected = 3.0;
        assert!((ema[0].value - expected).abs() < 1e-10);
        for (point, source) in ema[1..].iter().zip(data[5..].iter()) {
            expected = (source.close - expected) * k + expected;
            assert!(
                (point.value - expected).abs() < 1e-10,
                "got {}, expected {expected}",
                point.value
            );
            assert!((point.time - source.time).abs() < 1e-12);
        }
    }

    #[test]
    fn ema_length_matches_sma() {
        let data = points(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        for period in 1..=data.len() {
            assert_eq!(
                calculate_ema(&data, period).len(),
                calculate_sma(&data, period).len(),
                "period {period}"
            );
        }
    }

    #[test]
    fn ema_reacts_more_than_sma_to_spike() {
        // Four flat closes then a large spike: the EMA weights the spike more
        // heavily than the equal-weighted SMA does.
        let data = points(&[100.0, 100.0, 100.0, 100.0, 150.0]);
        let ema = calculate_ema(&data, 4);
        let sma = calculate_sma(&data, 4);
        let ema_last = ema.last().unwrap().value;
        let sma_last = sma.last().unwrap().value;
        assert!(
            ema_last > sma_last,
            "EMA {ema_last} should exceed SMA {sma_last}"
        );
    }
}
