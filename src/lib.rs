// =============================================================================
// Neon Charts — Moving-average engine and candlestick geometry mapper
// =============================================================================
//
// Pure chart math for candlestick renderers.  Two halves:
//
//   indicators — SMA/EMA series over time-stamped closes, plus crossover
//                detection between a fast and a slow line.
//   chart      — data-space to pixel-space mapping: candles, MA overlay
//                polylines, volume bars, and axis ticks.
//
// Nothing here draws or owns state.  Every function takes caller-owned
// slices and returns plain coordinate or series structs; insufficient or
// degenerate input produces empty vecs, `None`, or midpoint fallbacks, never
// a panic.  `style` holds the serde-backed rendering options with the neon
// default palette.

pub mod chart;
pub mod indicators;
pub mod style;
pub mod types;

pub use chart::{
    format_price_tick, format_time_tick, map_candles, map_ma_series, map_volume_bars, price_ticks,
    time_ticks, CandlestickLayout, ChartScale, DataBounds, PolylinePoint, RenderedCandle, Viewport,
    VolumeBar,
};
pub use indicators::{
    calculate_ema, calculate_ma, calculate_sma, detect_ma_crossover, detect_price_crossover,
    scan_ma_crossovers,
};
pub use style::{CandlePalette, ChartStyle};
pub use types::{Candle, CrossoverEvent, CrossoverSignal, MaPoint, MaType, PricePoint};
