// =============================================================================
// Chart Style — Rendering options with atomic save
// =============================================================================
//
// Central styling hub for the geometry mappers.  Every tunable rendering
// parameter lives here so that a host application can restyle the chart
// without touching layout code.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry serde defaults so that adding new fields never
// breaks loading an older style file.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_padding() -> f64 {
    16.0
}

fn default_body_density() -> f64 {
    0.7
}

fn default_volume_ratio() -> f64 {
    0.2
}

fn default_bullish_color() -> String {
    "#00ff9f".to_string()
}

fn default_bearish_color() -> String {
    "#ff2a6d".to_string()
}

fn default_doji_color() -> String {
    "#ffd319".to_string()
}

// =============================================================================
// CandlePalette
// =============================================================================

/// Hex colors for the three candle classes.  Defaults are the neon palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandlePalette {
    /// Fill for candles that closed above their open.
    #[serde(default = "default_bullish_color")]
    pub bullish: String,

    /// Fill for candles that closed below their open.
    #[serde(default = "default_bearish_color")]
    pub bearish: String,

    /// Fill for candles that closed exactly at their open.
    #[serde(default = "default_doji_color")]
    pub doji: String,
}

impl Default for CandlePalette {
    fn default() -> Self {
        Self {
            bullish: default_bullish_color(),
            bearish: default_bearish_color(),
            doji: default_doji_color(),
        }
    }
}

impl CandlePalette {
    /// Select the color for a candle from its classification flags.
    ///
    /// Bullish wins, then doji; everything else is bearish.  The two flags
    /// are mutually exclusive when derived from one candle (a doji is never
    /// bullish), so the ordering only matters for hand-built inputs.
    pub fn pick(&self, is_bullish: bool, is_doji: bool) -> &str {
        if is_bullish {
            &self.bullish
        } else if is_doji {
            &self.doji
        } else {
            &self.bearish
        }
    }
}

// =============================================================================
// ChartStyle
// =============================================================================

/// Top-level styling options for the chart mappers.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    // --- Layout --------------------------------------------------------------

    /// Pixel padding between the viewport edge and the chart area on every
    /// side.  Zero is valid and maps data extremes onto the viewport edges.
    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Explicit candle body width in pixels.  When `None` the width is
    /// computed from the available horizontal space and candle count.
    #[serde(default)]
    pub candle_width: Option<f64>,

    /// Fraction of each candle's horizontal slot taken by the body when the
    /// width is computed.  The remainder becomes the gap between candles.
    #[serde(default = "default_body_density")]
    pub body_density: f64,

    /// Fraction of the chart height reserved for the volume band at the
    /// bottom of the chart.
    #[serde(default = "default_volume_ratio")]
    pub volume_ratio: f64,

    // --- Colors --------------------------------------------------------------

    /// Three-way candle palette (bullish / bearish / doji).
    #[serde(default)]
    pub palette: CandlePalette,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            candle_width: None,
            body_density: default_body_density(),
            volume_ratio: default_volume_ratio(),
            palette: CandlePalette::default(),
        }
    }
}

impl ChartStyle {
    /// Load styling options from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read chart style from {}", path.display()))?;

        let style: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse chart style from {}", path.display()))?;

        info!(
            path = %path.display(),
            padding = style.padding,
            candle_width = ?style.candle_width,
            "chart style loaded"
        );

        Ok(style)
    }

    /// Persist the current styling options to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    ///
    /// This prevents corruption if the process crashes mid-write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise chart style to JSON")?;

        // Atomic write: write to a temporary sibling file, then rename.
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp style to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp style to {}", path.display()))?;

        info!(path = %path.display(), "chart style saved (atomic)");
        Ok(())
    }
}
