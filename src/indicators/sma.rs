// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Unweighted mean of the last `period` closes.  Computed with a sliding-window
// sum, so a full series costs O(n) regardless of the period.
//
// Each output point carries the timestamp of the *last* close in its window,
// which keeps the series aligned with the input minus the warm-up prefix.

use crate::types::{MaPoint, PricePoint};

/// Compute the SMA series for `data` and look-back `period`.
///
/// Output point `i` covers `data[i ..= i + period - 1]` and is stamped with
/// the time of the window's final sample.  When the preconditions hold the
/// result has exactly `data.len() - period + 1` points.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `data.len() < period` => empty vec
pub fn calculate_sma(data: &[PricePoint], period: usize) -> Vec<MaPoint> {
    if period == 0 || data.len() < period {
        return Vec::new();
    }

    let period_f = period as f64;
    let mut result = Vec::with_capacity(data.len() - period + 1);

    // Prime the window with the first `period` closes.
    let mut sum: f64 = data[..period].iter().map(|p| p.close).sum();
    result.push(MaPoint {
        time: data[period - 1].time,
        value: sum / period_f,
    });

    // Slide: drop the oldest close, add the newest.
    for i in period..data.len() {
        sum += data[i].close - data[i - period].close;
        result.push(MaPoint {
            time: data[i].time,
            value: sum / period_f,
        });
    }

    result
}
