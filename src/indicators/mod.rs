// =============================================================================
// Moving-Average Engine
// =============================================================================
//
// Pure, side-effect-free moving-average calculations and crossover detection
// over time-stamped close prices.  Insufficient data never errors: series
// functions return an empty vec and detectors return `None`, so callers can
// feed partial windows straight through without guarding.

pub mod crossover;
pub mod ema;
pub mod sma;

pub use crossover::{detect_ma_crossover, detect_price_crossover, scan_ma_crossovers};
pub use ema::calculate_ema;
pub use sma::calculate_sma;

use crate::types::{MaPoint, MaType, PricePoint};

/// Calculate a moving average of the requested `kind` over `data`.
///
/// Dispatches to [`calculate_sma`] or [`calculate_ema`]; `MaType::default()`
/// selects the simple variant.
pub fn calculate_ma(data: &[PricePoint], period: usize, kind: MaType) -> Vec<MaPoint> {
    match kind {
        MaType::Sma => calculate_sma(data, period),
        MaType::Ema => calculate_ema(data, period),
    }
}
