// =============================================================================
// Chart Scale — Linear data-space to pixel-space transform
// =============================================================================
//
// Single source of truth for the coordinate mapping every chart layer uses.
// Time maps linearly onto `[padding, width - padding]`; price maps onto
// `[padding, height - padding]` with the Y axis inverted so higher prices
// sit nearer the top of the viewport.
//
// Degenerate bounds (zero span on an axis) collapse that axis to the
// midpoint of its pixel range instead of dividing by zero, so every input
// still produces finite coordinates.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::Candle;

// =============================================================================
// Viewport
// =============================================================================

/// Pixel dimensions of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// DataBounds
// =============================================================================

/// Data-space extent of the chart: time on the x axis, price on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataBounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Auto-fit bounds to a candle series: x spans the first through last
    /// candle time, y spans the lowest low through the highest high.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_candles(candles: &[Candle]) -> Option<Self> {
        let first = candles.first()?;
        let last = candles.last()?;

        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for candle in candles {
            min_y = min_y.min(candle.low);
            max_y = max_y.max(candle.high);
        }

        Some(Self {
            min_x: first.time,
            max_x: last.time,
            min_y,
            max_y,
        })
    }

    /// Expand the price range symmetrically by `frac` of its span on each
    /// side, leaving visual headroom above and below the candles.
    pub fn with_price_margin(self, frac: f64) -> Self {
        let pad = self.span_y() * frac;
        Self {
            min_y: self.min_y - pad,
            max_y: self.max_y + pad,
            ..self
        }
    }

    pub fn span_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn span_y(&self) -> f64 {
        self.max_y - self.min_y
    }
}

// =============================================================================
// ChartScale
// =============================================================================

/// Linear transform from data space into the padded chart area.
///
/// Construct one per render pass; the mappers share it so candles, overlay
/// lines, and volume bars all land in the same pixel frame.
#[derive(Debug, Clone, Copy)]
pub struct ChartScale {
    bounds: DataBounds,
    padding: f64,
    chart_width: f64,
    chart_height: f64,
}

impl ChartScale {
    pub fn new(viewport: Viewport, bounds: DataBounds, padding: f64) -> Self {
        let chart_width = viewport.width - 2.0 * padding;
        let chart_height = viewport.height - 2.0 * padding;

        if bounds.span_x() == 0.0 || bounds.span_y() == 0.0 {
            warn!(
                span_x = bounds.span_x(),
                span_y = bounds.span_y(),
                "degenerate bounds, collapsing zero-span axis to pixel midpoint"
            );
        }

        Self {
            bounds,
            padding,
            chart_width,
            chart_height,
        }
    }

    /// Pixel x for a data-space time.
    pub fn x(&self, time: f64) -> f64 {
        let span = self.bounds.span_x();
        if span == 0.0 {
            return self.padding + self.chart_width * 0.5;
        }
        self.padding + (time - self.bounds.min_x) / span * self.chart_width
    }

    /// Pixel y for a data-space price.  Inverted: `max_y` lands at the top
    /// of the chart area, `min_y` at the bottom.
    pub fn y(&self, price: f64) -> f64 {
        let span = self.bounds.span_y();
        if span == 0.0 {
            return self.padding + self.chart_height * 0.5;
        }
        self.padding + (1.0 - (price - self.bounds.min_y) / span) * self.chart_height
    }

    /// Width of the drawable chart area (viewport width minus padding on
    /// both sides).
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    /// Height of the drawable chart area.
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }
}
