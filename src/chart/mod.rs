// =============================================================================
// Candlestick Geometry Mapper
// =============================================================================
//
// Pure data-space to pixel-space mapping for candlestick charts: candles,
// moving-average overlays, volume bars, and axis ticks.  Nothing in this
// module draws; the outputs are plain coordinate structs a renderer (canvas,
// GPU, SVG) consumes as-is.

pub mod axis;
pub mod candlestick;
pub mod overlay;
pub mod scale;

pub use axis::{format_price_tick, format_time_tick, price_ticks, time_ticks};
pub use candlestick::{map_candles, CandlestickLayout, RenderedCandle};
pub use overlay::{map_ma_series, map_volume_bars, PolylinePoint, VolumeBar};
pub use scale::{ChartScale, DataBounds, Viewport};
