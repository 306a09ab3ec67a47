//! Core type definitions used throughout the codebase

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How county sizes and racial ratios are drawn from a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Every county shares the state ratio
    Uniform,
    /// Each county draws its own ratio independently
    Random,
    /// County ratios scatter normally around the state ratio
    #[default]
    Centered,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Uniform => "uniform",
            Policy::Random => "random",
            Policy::Centered => "centered",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive-exclusive range of ratios, `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    pub low: f64,
    pub high: f64,
}

impl RatioRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.low) && (0.0..=1.0).contains(&self.high) && self.low < self.high
    }
}

/// Statewide white and black totals that county shares are measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateTotals {
    pub white: f64,
    pub black: f64,
}

impl StateTotals {
    pub fn new(white: f64, black: f64) -> Self {
        Self { white, black }
    }

    /// `|w / W - b / B|` for a single county
    pub fn unevenness(&self, white: f64, black: f64) -> f64 {
        (white / self.white - black / self.black).abs()
    }
}
