// =============================================================================
// Moving-Average Crossover Detection
// =============================================================================
//
// Detects the moment a fast moving-average line crosses a slow one between
// two consecutive samples.
//
// Detection rule (applied to one pair of consecutive ticks):
//   BULLISH  when prev_fast <= prev_slow AND curr_fast >  curr_slow
//   BEARISH  when prev_fast >= prev_slow AND curr_fast <  curr_slow
//
// Equality on the earlier tick counts as "at or below" (resp. "at or above"),
// so a line that touches the other and then breaks through still registers.

use tracing::debug;

use crate::indicators::calculate_ma;
use crate::types::{CrossoverEvent, CrossoverSignal, MaPoint, MaType, PricePoint};

/// Inspect the two most recent points of `fast` and `slow` and report a
/// crossover, if any.
///
/// Alignment is positional: index `len - 1` of one series is compared with
/// index `len - 1` of the other, regardless of timestamps.  Callers must
/// supply series whose tails describe the same two instants.  That holds
/// automatically for MAs derived from one input series, since both end at
/// the final input sample; [`detect_price_crossover`] wraps that derivation.
///
/// Returns `None` when:
/// - Either series has fewer than 2 points (cannot determine).
/// - The lines did not change relative order between the two ticks,
///   including exactly parallel lines.
pub fn detect_ma_crossover(fast: &[MaPoint], slow: &[MaPoint]) -> Option<CrossoverSignal> {
    if fast.len() < 2 || slow.len() < 2 {
        return None;
    }

    signal_between(
        fast[fast.len() - 2].value,
        slow[slow.len() - 2].value,
        fast[fast.len() - 1].value,
        slow[slow.len() - 1].value,
    )
}

/// Compute fast and slow moving averages of the same `kind` over `data` and
/// check their two most recent ticks for a crossover.
///
/// The slow series has the longer warm-up, but both series end at the final
/// input sample, so the tail comparison is time-aligned by construction.
///
/// Returns `None` when either derived series has fewer than 2 points.
pub fn detect_price_crossover(
    data: &[PricePoint],
    fast_period: usize,
    slow_period: usize,
    kind: MaType,
) -> Option<CrossoverSignal> {
    let fast = calculate_ma(data, fast_period, kind);
    let slow = calculate_ma(data, slow_period, kind);

    let signal = detect_ma_crossover(&fast, &slow);
    if let Some(signal) = signal {
        debug!(
            signal = %signal,
            fast_period,
            slow_period,
            kind = %kind,
            "price crossover detected"
        );
    }
    signal
}

/// Walk two series pairwise and report every crossover, stamped with the
/// time of the tick on which the lines changed sides.
///
/// The series are aligned from the tail (their final points are assumed to
/// describe the same instant, as holds for MAs derived from one input
/// series); the shorter series bounds the walk.  Fewer than 2 comparable
/// positions yields an empty vec.
///
/// Chart layers use the result to place signal markers.
pub fn scan_ma_crossovers(fast: &[MaPoint], slow: &[MaPoint]) -> Vec<CrossoverEvent> {
    let len = fast.len().min(slow.len());
    if len < 2 {
        return Vec::new();
    }

    let fast = &fast[fast.len() - len..];
    let slow = &slow[slow.len() - len..];

    let mut events = Vec::new();
    for i in 1..len {
        let signal = signal_between(
            fast[i - 1].value,
            slow[i - 1].value,
            fast[i].value,
            slow[i].value,
        );
        if let Some(signal) = signal {
            events.push(CrossoverEvent {
                time: fast[i].time,
                signal,
            });
        }
    }
    events
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Apply the crossover rule to one pair of consecutive ticks.
fn signal_between(
    prev_fast: f64,
    prev_slow: f64,
    curr_fast: f64,
    curr_slow: f64,
) -> Option<CrossoverSignal> {
    if prev_fast <= prev_slow && curr_fast > curr_slow {
        Some(CrossoverSignal::Bullish)
    } else if prev_fast >= prev_slow && curr_fast < curr_slow {
        Some(CrossoverSignal::Bearish)
    } else {
        None
    }
}
