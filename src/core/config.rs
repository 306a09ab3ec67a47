//! Simulation configuration with documented constants
//!
//! All magic numbers of the county model are collected here with a note on
//! what they control. The defaults reproduce the reference experiment:
//! a state of 10,000 people, centered counties, 1,000 iterations.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Policy, RatioRange};

/// Top-level configuration for a Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Total population of every simulated state
    pub population: u32,

    /// County generation policy
    pub policy: Policy,

    /// Number of independent states to simulate
    pub iterations: u32,

    /// Seed for the run; a fresh one is drawn when absent
    pub seed: Option<u64>,

    /// Model constants
    pub generation: GenerationParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: 10_000,
            policy: Policy::Centered,
            iterations: 1000,
            seed: None,
            generation: GenerationParams::default(),
        }
    }
}

/// Constants of the county generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    // === STATE ===
    /// Range of the statewide white share drawn for each iteration
    pub state_ratio: RatioRange,

    // === COUNTY SIZES ===
    /// Smallest county drawn by the uniform and random policies
    pub min_county_size: u32,

    /// Smallest county drawn by the centered policy
    ///
    /// Must stay above 2: the expected neighbor formula divides by
    /// `(n - 1)(n - 2)`.
    pub centered_min_county_size: u32,

    /// Largest county drawn by any policy
    ///
    /// Also bounds the population shortfall left by the dropped final county.
    pub max_county_size: u32,

    // === COUNTY RATIOS ===
    /// Range of independent county ratios for the random policy
    pub county_ratio: RatioRange,

    /// Centered policy spread: standard deviation is `ratio / divisor`
    pub centered_spread_divisor: f64,

    // === INDEX ===
    /// Shift applied to the Logan-Parman denominator, `(e - actual) / (e - shift)`
    pub index_denominator_shift: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            state_ratio: RatioRange::new(0.25, 0.75),
            min_county_size: 1,
            centered_min_county_size: 10,
            max_county_size: 999,
            county_ratio: RatioRange::new(0.25, 0.75),
            centered_spread_divisor: 3.0,
            index_denominator_shift: 2.0,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file; missing keys take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.population <= 2 {
            return Err(SimError::InvalidConfig(format!(
                "population must exceed 2, got {}",
                self.population
            )));
        }
        self.generation.validate()
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<()> {
        if !self.state_ratio.is_valid() {
            return Err(SimError::InvalidConfig(format!(
                "state_ratio {:?} must be an ordered range within [0, 1]",
                self.state_ratio
            )));
        }
        if !self.county_ratio.is_valid() {
            return Err(SimError::InvalidConfig(format!(
                "county_ratio {:?} must be an ordered range within [0, 1]",
                self.county_ratio
            )));
        }
        if self.min_county_size < 1 {
            return Err(SimError::InvalidConfig("min_county_size must be at least 1".into()));
        }
        if self.centered_min_county_size < 3 {
            return Err(SimError::InvalidConfig(
                "centered_min_county_size must be at least 3".into(),
            ));
        }
        let smallest = self.min_county_size.max(self.centered_min_county_size);
        if self.max_county_size < smallest {
            return Err(SimError::InvalidConfig(format!(
                "max_county_size {} is below the minimum county size {}",
                self.max_county_size, smallest
            )));
        }
        if !(self.centered_spread_divisor > 0.0) {
            return Err(SimError::InvalidConfig(
                "centered_spread_divisor must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population, 10_000);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.policy, Policy::Centered);
        assert_eq!(config.generation.max_county_size, 999);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SimulationConfig = toml::from_str(
            r#"
            policy = "uniform"
            iterations = 5

            [generation]
            max_county_size = 500
            "#,
        )
        .expect("Should parse partial config");

        assert_eq!(config.policy, Policy::Uniform);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.population, 10_000);
        assert_eq!(config.generation.max_county_size, 500);
        assert_eq!(config.generation.centered_min_county_size, 10);
    }

    #[test]
    fn test_rejects_tiny_population() {
        let config = SimulationConfig { population: 2, ..Default::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_unsafe_centered_minimum() {
        let mut config = SimulationConfig::default();
        config.generation.centered_min_county_size = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_ratio_range() {
        let mut config = SimulationConfig::default();
        config.generation.county_ratio = RatioRange::new(0.8, 0.2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_policy_fails_to_parse() {
        let parsed: std::result::Result<SimulationConfig, _> =
            toml::from_str(r#"policy = "clustered""#);
        assert!(parsed.is_err());
    }
}
