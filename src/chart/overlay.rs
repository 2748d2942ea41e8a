// =============================================================================
// Chart Overlays — MA polylines and volume bars
// =============================================================================
//
// Secondary layers drawn over (or under) the candlesticks.  Both share the
// candle transform: passing the same viewport, bounds, and style used for
// `map_candles` guarantees the layers land in the same pixel frame.

use serde::Serialize;
use tracing::debug;

use crate::chart::candlestick::body_width;
use crate::chart::scale::{ChartScale, DataBounds, Viewport};
use crate::style::ChartStyle;
use crate::types::{Candle, MaPoint};

// =============================================================================
// Output types
// =============================================================================

/// One vertex of an overlay polyline, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolylinePoint {
    pub x: f64,
    pub y: f64,
}

/// One volume bar anchored to the bottom edge of the chart area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeBar {
    /// Pixel center, aligned with the owning candle.
    pub x: f64,
    /// Top of the bar; equals `bottom` for zero volume.
    pub top: f64,
    /// Bottom of the bar, on the chart's bottom edge.
    pub bottom: f64,
    /// Bar width in pixels, same as the candle body width.
    pub width: f64,
    /// Hex fill color following the owning candle's classification.
    pub color: String,
}

// =============================================================================
// Mapping
// =============================================================================

/// Map a moving-average series into polyline vertices over the chart area.
///
/// Uses the same transform as the candles, so an MA computed from the
/// candles' closes overlays them exactly.  Empty input yields an empty vec.
pub fn map_ma_series(
    points: &[MaPoint],
    viewport: Viewport,
    bounds: DataBounds,
    style: &ChartStyle,
) -> Vec<PolylinePoint> {
    let scale = ChartScale::new(viewport, bounds, style.padding);
    points
        .iter()
        .map(|p| PolylinePoint {
            x: scale.x(p.time),
            y: scale.y(p.value),
        })
        .collect()
}

/// Map per-candle volume into bars in a band at the bottom of the chart
/// area.  Bar height is linear in volume; the loudest candle fills
/// `style.volume_ratio` of the chart height.
///
/// Returns an empty vec when:
/// - No candle carries a volume.
/// - The maximum volume is not positive (nothing to normalise against).
///
/// Candles without a volume are skipped; a candle with volume `0.0` emits a
/// zero-height bar so the series stays aligned with the candle slots.
pub fn map_volume_bars(
    candles: &[Candle],
    viewport: Viewport,
    bounds: DataBounds,
    style: &ChartStyle,
) -> Vec<VolumeBar> {
    let max_volume = candles
        .iter()
        .filter_map(|c| c.volume)
        .fold(0.0_f64, f64::max);
    if max_volume <= 0.0 {
        return Vec::new();
    }

    let scale = ChartScale::new(viewport, bounds, style.padding);
    let bottom = style.padding + scale.chart_height();
    let band = scale.chart_height() * style.volume_ratio;
    let width = body_width(scale.chart_width(), candles.len(), style);

    let mut bars = Vec::new();
    for candle in candles {
        if let Some(volume) = candle.volume {
            bars.push(VolumeBar {
                x: scale.x(candle.time),
                top: bottom - volume / max_volume * band,
                bottom,
                width,
                color: style
                    .palette
                    .pick(candle.is_bullish(), candle.is_doji())
                    .to_string(),
            });
        }
    }

    debug!(bars = bars.len(), max_volume, "volume bars produced");
    bars
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::candlestick::map_candles;

    fn style_with_padding(padding: f64) -> ChartStyle {
        ChartStyle {
            padding,
            ..ChartStyle::default()
        }
    }

    // ---- map_ma_series ---------------------------------------------------

    #[test]
    fn empty_series_maps_to_empty_polyline() {
        let out = map_ma_series(
            &[],
            Viewport::new(100.0, 100.0),
            DataBounds::new(0.0, 1.0, 0.0, 1.0),
            &ChartStyle::default(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn polyline_shares_the_candle_transform() {
        // A doji's body edges sit exactly at y(close); an MA point with the
        // same time and value must land on the same pixel.
        let candles = vec![
            Candle::new(1.0, 100.0, 105.0, 95.0, 100.0),
            Candle::new(2.0, 100.0, 110.0, 90.0, 108.0),
        ];
        let bounds = DataBounds::from_candles(&candles).unwrap();
        let viewport = Viewport::new(500.0, 400.0);
        let style = style_with_padding(12.0);

        let layout = map_candles(&candles, viewport, bounds, &style);
        let line = map_ma_series(&[MaPoint::new(1.0, 100.0)], viewport, bounds, &style);

        assert!((line[0].x - layout.candles[0].x).abs() < 1e-9);
        assert!((line[0].y - layout.candles[0].body_top).abs() < 1e-9);
    }

    // ---- map_volume_bars -------------------------------------------------

    fn volumed(time: f64, close: f64, volume: Option<f64>) -> Candle {
        let candle = Candle::new(
            time,
            100.0,
            close.max(100.0) + 1.0,
            close.min(100.0) - 1.0,
            close,
        );
        match volume {
            Some(v) => candle.with_volume(v),
            None => candle,
        }
    }

    #[test]
    fn no_volume_means_no_bars() {
        let candles = vec![volumed(1.0, 101.0, None), volumed(2.0, 99.0, None)];
        let bounds = DataBounds::from_candles(&candles).unwrap();
        let bars = map_volume_bars(
            &candles,
            Viewport::new(200.0, 200.0),
            bounds,
            &ChartStyle::default(),
        );
        assert!(bars.is_empty());

        let zeroed = vec![volumed(1.0, 101.0, Some(0.0))];
        let bars = map_volume_bars(
            &zeroed,
            Viewport::new(200.0, 200.0),
            DataBounds::from_candles(&zeroed).unwrap(),
            &ChartStyle::default(),
        );
        assert!(bars.is_empty());
    }

    #[test]
    fn bar_heights_scale_with_volume() {
        let candles = vec![
            volumed(1.0, 101.0, Some(50.0)),
            volumed(2.0, 99.0, Some(100.0)),
        ];
        let bounds = DataBounds::from_candles(&candles).unwrap();
        let style = style_with_padding(10.0);
        let bars = map_volume_bars(&candles, Viewport::new(400.0, 210.0), bounds, &style);

        assert_eq!(bars.len(), 2);
        // chart_height = 190, band = 38.
        let band = 190.0 * style.volume_ratio;
        assert!(((bars[0].bottom - bars[0].top) - band * 0.5).abs() < 1e-9);
        assert!(((bars[1].bottom - bars[1].top) - band).abs() < 1e-9);
    }

    #[test]
    fn bars_sit_on_the_chart_bottom_edge() {
        let candles = vec![volumed(1.0, 101.0, Some(5.0)), volumed(2.0, 99.0, Some(7.0))];
        let bounds = DataBounds::from_candles(&candles).unwrap();
        let bars = map_volume_bars(
            &candles,
            Viewport::new(300.0, 240.0),
            bounds,
            &style_with_padding(20.0),
        );
        for bar in &bars {
            assert!((bar.bottom - 220.0).abs() < 1e-9);
            assert!(bar.top <= bar.bottom);
        }
    }

    #[test]
    fn missing_volume_candles_are_skipped() {
        let candles = vec![
            volumed(1.0, 101.0, Some(10.0)),
            volumed(2.0, 99.0, None),
            volumed(3.0, 101.0, Some(20.0)),
        ];
        let bounds = DataBounds::from_candles(&candles).unwrap();
        let style = style_with_padding(0.0);
        let bars = map_volume_bars(&candles, Viewport::new(300.0, 100.0), bounds, &style);

        assert_eq!(bars.len(), 2);
        // The surviving bars keep their own candles' x positions.
        assert!((bars[0].x - 0.0).abs() < 1e-9);
        assert!((bars[1].x - 300.0).abs() < 1e-9);
    }

    #[test]
    fn bar_colors_follow_candle_classification() {
        let candles = vec![
            volumed(1.0, 101.0, Some(10.0)), // close > open: bullish
            volumed(2.0, 99.0, Some(10.0)),  // close < open: bearish
        ];
        let bounds = DataBounds::from_candles(&candles).unwrap();
        let bars = map_volume_bars(
            &candles,
            Viewport::new(300.0, 100.0),
            bounds,
            &ChartStyle::default(),
        );
        assert_eq!(bars[0].color, "#00ff9f");
        assert_eq!(bars[1].color, "#ff2a6d");
    }
}
