//! Monte Carlo Aggregation
//!
//! Simulates many independent states, summarizes each one, and compares
//! the sum of county-level neighbor estimates against a single whole-state
//! estimate.

pub mod output;
pub mod simulation;
pub mod stats;

pub use output::{ResultRow, ResultTable, SimulationOutput, SimulationStats};
pub use simulation::{
    expected_neighbor_state, monte_carlo, random_state_ratio, simulate, RunSummary,
};
