//! Monte Carlo loop

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::aggregate::output::SimulationOutput;
use crate::core::config::{GenerationParams, SimulationConfig};
use crate::core::error::Result;
use crate::county::{expected_neighbors, generate_counties, County};

/// Raw summary of one simulated state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Sum of county-level expected neighbor counts
    pub expected: f64,
    /// Expected neighbor count computed once for the whole state
    pub expected_state: f64,
    /// Summed county unevenness (not yet halved)
    pub unevenness: f64,
    /// Number of retained counties
    pub counties: usize,
    /// Mean county index; absent when no county carries one
    pub logan_parman: Option<f64>,
}

impl RunSummary {
    pub fn from_counties(counties: &[County], expected_state: f64) -> Self {
        let expected = counties.iter().filter_map(County::expected_neighbors).sum();
        let unevenness = counties.iter().map(|c| c.unevenness).sum();

        let indices: Vec<f64> = counties.iter().filter_map(County::logan_parman).collect();
        let logan_parman = if indices.is_empty() {
            None
        } else {
            Some(indices.iter().sum::<f64>() / indices.len() as f64)
        };

        Self {
            expected,
            expected_state,
            unevenness,
            counties: counties.len(),
            logan_parman,
        }
    }
}

/// Draw a statewide white share from `params.state_ratio`
pub fn random_state_ratio(params: &GenerationParams, rng: &mut ChaCha8Rng) -> f64 {
    rng.gen_range(params.state_ratio.low..params.state_ratio.high)
}

/// Whole-state expected neighbor count, with `W = N * ratio` left unrounded
pub fn expected_neighbor_state(population: i64, ratio: f64) -> Result<f64> {
    let white = population as f64 * ratio;
    let black = population as f64 - white;
    expected_neighbors(white, black, population)
}

/// Run `config.iterations` independent states and summarize each
///
/// The first failure (e.g. an undefined county index) aborts the run.
pub fn monte_carlo(config: &SimulationConfig, rng: &mut ChaCha8Rng) -> Result<Vec<RunSummary>> {
    let population = config.population as i64;
    let mut runs = Vec::with_capacity(config.iterations as usize);

    for iteration in 0..config.iterations {
        let ratio = random_state_ratio(&config.generation, rng);
        let counties =
            generate_counties(config.policy, population, ratio, &config.generation, rng)?;
        let expected_state = expected_neighbor_state(population, ratio)?;
        let summary = RunSummary::from_counties(&counties, expected_state);

        tracing::debug!(
            iteration,
            ratio,
            counties = summary.counties,
            expected = summary.expected,
            expected_state,
            "state simulated"
        );
        runs.push(summary);
    }

    Ok(runs)
}

/// Run the full simulation described by `config`
pub fn simulate(config: SimulationConfig) -> Result<SimulationOutput> {
    config.validate()?;
    let start = Instant::now();

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(
        seed,
        policy = %config.policy,
        population = config.population,
        iterations = config.iterations,
        "starting Monte Carlo run"
    );

    let runs = monte_carlo(&config, &mut rng)?;
    let elapsed = start.elapsed();

    let output = SimulationOutput::new(config, seed, &runs, elapsed);
    if !output.table.is_empty() && output.statistics.plottable_rows == 0 {
        tracing::warn!("no iteration produced a Logan-Parman index inside (0, 1)");
    }
    tracing::info!(
        iterations = output.statistics.iterations,
        elapsed_ms = output.statistics.simulation_time_ms,
        "Monte Carlo run complete"
    );
    Ok(output)
}
