//! County records produced by the generator

use serde::{Deserialize, Serialize};

/// A synthetic sub-population with a white/black split
///
/// Splits are stored as `f64`: the uniform policy applies the state ratio
/// without rounding, and the centered policy may overshoot `population`
/// (a negative `black`) since its ratio is never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    pub white: f64,
    pub black: f64,
    pub population: u32,
    /// White share the county was generated with
    pub ratio: f64,
    /// `|w / W - b / B|` against the statewide totals
    pub unevenness: f64,
    /// Only the centered policy simulates neighbor exposure
    pub neighbors: Option<NeighborStats>,
}

/// Expected vs. simulated neighbor exposure for one county
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborStats {
    pub expected: f64,
    pub actual: u64,
    pub logan_parman: f64,
}

impl County {
    pub fn expected_neighbors(&self) -> Option<f64> {
        self.neighbors.map(|n| n.expected)
    }

    pub fn logan_parman(&self) -> Option<f64> {
        self.neighbors.map(|n| n.logan_parman)
    }
}
