// =============================================================================
// Axis Ticks — Tick positions and label formatting
// =============================================================================
//
// Evenly spaced tick values in data space (callers run them through
// `ChartScale` to place gridlines) plus the label formatters the axes use.

use chrono::DateTime;

use crate::chart::scale::DataBounds;

/// Evenly spaced price values from `min_y` to `max_y` inclusive.
///
/// Returns an empty vec when `count < 2` or the price span is not positive.
pub fn price_ticks(bounds: DataBounds, count: usize) -> Vec<f64> {
    if count < 2 || bounds.span_y() <= 0.0 {
        return Vec::new();
    }
    let step = bounds.span_y() / (count - 1) as f64;
    (0..count).map(|i| bounds.min_y + i as f64 * step).collect()
}

/// Evenly spaced time values from `min_x` to `max_x` inclusive.
///
/// Returns an empty vec when `count < 2` or the time span is not positive.
pub fn time_ticks(bounds: DataBounds, count: usize) -> Vec<f64> {
    if count < 2 || bounds.span_x() <= 0.0 {
        return Vec::new();
    }
    let step = bounds.span_x() / (count - 1) as f64;
    (0..count).map(|i| bounds.min_x + i as f64 * step).collect()
}

/// Price label with two decimal places, e.g. `1234.50`.
pub fn format_price_tick(value: f64) -> String {
    format!("{value:.2}")
}

/// Time label as `HH:MM:SS` in UTC from a millisecond timestamp.
///
/// Non-finite or out-of-range inputs yield an empty string rather than a
/// panic; the axis simply skips the label.
pub fn format_time_tick(ms: f64) -> String {
    if !ms.is_finite() {
        return String::new();
    }
    match DateTime::from_timestamp_millis(ms as i64) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => String::new(),
    }
}
