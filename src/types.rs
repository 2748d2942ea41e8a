// =============================================================================
// Shared types used across the neon-charts crate
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single close-price observation on a numeric time axis.
///
/// Sequences of price points are expected to be ordered by `time` ascending;
/// the indicator functions do not verify this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: f64,
    pub close: f64,
}

impl PricePoint {
    pub fn new(time: f64, close: f64) -> Self {
        Self { time, close }
    }
}

/// One moving-average output sample.
///
/// Carries the timestamp of the last input sample in its window, so an MA
/// series aligns with its source series minus the warm-up prefix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaPoint {
    pub time: f64,
    pub value: f64,
}

impl MaPoint {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Which moving average [`calculate_ma`](crate::indicators::calculate_ma)
/// dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaType {
    Sma,
    Ema,
}

impl Default for MaType {
    fn default() -> Self {
        Self::Sma
    }
}

impl std::fmt::Display for MaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sma => write!(f, "SMA"),
            Self::Ema => write!(f, "EMA"),
        }
    }
}

/// Direction of a detected moving-average crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverSignal {
    /// Fast line moved from at-or-below the slow line to strictly above it.
    Bullish,
    /// Fast line moved from at-or-above the slow line to strictly below it.
    Bearish,
}

impl std::fmt::Display for CrossoverSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "BULLISH"),
            Self::Bearish => write!(f, "BEARISH"),
        }
    }
}

/// A crossover located on the time axis, as produced by a full-series scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverEvent {
    /// Time of the tick on which the lines changed sides.
    pub time: f64,
    pub signal: CrossoverSignal,
}

/// Normalised OHLC candle with an optional volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Close strictly above open.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Open and close exactly equal: no net directional movement.
    pub fn is_doji(&self) -> bool {
        self.close == self.open
    }

    /// Close strictly below open.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}
