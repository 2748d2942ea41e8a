// =============================================================================
// Candlestick Layout — Candles mapped into pixel space
// =============================================================================
//
// Turns a candle series plus viewport, bounds, and style into the rectangles
// and wick segments a renderer draws.  Pure math: the output is recomputed
// fresh on every call and holds no identity between calls.

use serde::Serialize;
use tracing::debug;

use crate::chart::scale::{ChartScale, DataBounds, Viewport};
use crate::style::ChartStyle;
use crate::types::Candle;

// =============================================================================
// Output types
// =============================================================================

/// One candle resolved to pixel coordinates, ready to draw.
///
/// Vertical fields are pixel y values with the axis inverted, so
/// `wick_top <= body_top <= body_bottom <= wick_bottom` always holds for
/// well-formed candles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCandle {
    /// Pixel center of the candle on the x axis.
    pub x: f64,
    /// Top of the body rectangle, from the higher of open/close.
    pub body_top: f64,
    /// Bottom of the body rectangle, from the lower of open/close.
    pub body_bottom: f64,
    /// Upper wick end, from the high.
    pub wick_top: f64,
    /// Lower wick end, from the low.
    pub wick_bottom: f64,
    /// Body width in pixels.
    pub width: f64,
    pub is_bullish: bool,
    pub is_doji: bool,
    /// Hex fill color selected from the palette.
    pub color: String,
}

/// Full candlestick layout for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickLayout {
    pub candles: Vec<RenderedCandle>,
    /// Drawable width after padding, for layout consumers.
    pub chart_width: f64,
    /// Drawable height after padding.
    pub chart_height: f64,
}

// =============================================================================
// Mapping
// =============================================================================

/// Map a candle series into pixel space.
///
/// # Edge cases
/// - Empty `candles` yields an empty layout; chart dimensions are still
///   reported so the host can lay out an empty chart.
/// - Degenerate `bounds` collapse the affected axis to its pixel midpoint
///   (see [`ChartScale`]); coordinates stay finite.
pub fn map_candles(
    candles: &[Candle],
    viewport: Viewport,
    bounds: DataBounds,
    style: &ChartStyle,
) -> CandlestickLayout {
    let scale = ChartScale::new(viewport, bounds, style.padding);

    if candles.is_empty() {
        return CandlestickLayout {
            candles: Vec::new(),
            chart_width: scale.chart_width(),
            chart_height: scale.chart_height(),
        };
    }

    let width = body_width(scale.chart_width(), candles.len(), style);

    let mut rendered = Vec::with_capacity(candles.len());
    for candle in candles {
        let is_bullish = candle.is_bullish();
        let is_doji = candle.is_doji();

        rendered.push(RenderedCandle {
            x: scale.x(candle.time),
            body_top: scale.y(candle.open.max(candle.close)),
            body_bottom: scale.y(candle.open.min(candle.close)),
            wick_top: scale.y(candle.high),
            wick_bottom: scale.y(candle.low),
            width,
            is_bullish,
            is_doji,
            color: style.palette.pick(is_bullish, is_doji).to_string(),
        });
    }

    debug!(
        candles = rendered.len(),
        body_width = width,
        "candlestick layout produced"
    );

    CandlestickLayout {
        candles: rendered,
        chart_width: scale.chart_width(),
        chart_height: scale.chart_height(),
    }
}

/// Candle body width in pixels: the explicit style override when set,
/// otherwise each candle's share of the horizontal space scaled by the
/// body density, floored at 1 px so dense charts never drop to invisible
/// bodies.
pub(crate) fn body_width(chart_width: f64, count: usize, style: &ChartStyle) -> f64 {
    if let Some(width) = style.candle_width {
        return width;
    }
    (chart_width / count.max(1) as f64 * style.body_density).max(1.0)
}
