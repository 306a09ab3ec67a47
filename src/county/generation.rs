//! County generation policies
//!
//! Every policy draws counties until the state's remaining population drops
//! below one. The county that exhausts the population is incomplete and is
//! discarded, so the retained counties sum to at most the target and the
//! shortfall never exceeds the largest county size.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::core::config::GenerationParams;
use crate::core::error::{Result, SimError};
use crate::core::types::{Policy, StateTotals};
use crate::county::neighbors::{expected_neighbors, logan_parman, simulate_actual};
use crate::county::record::{County, NeighborStats};

/// White and black residents not yet assigned to a county
///
/// Either pool may go negative: splits are rounded per county and the
/// centered policy does not clamp its ratios. Only the combined remainder
/// decides when the state is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pools {
    pub white: i64,
    pub black: i64,
}

impl Pools {
    pub fn new(white: i64, black: i64) -> Self {
        Self { white, black }
    }

    /// Split a state of `population` by `ratio`, rounding the white pool
    pub fn from_ratio(population: i64, ratio: f64) -> Self {
        let white = (ratio * population as f64).round_ties_even() as i64;
        Self::new(white, population - white)
    }

    pub fn remaining(&self) -> i64 {
        self.white + self.black
    }

    fn withdraw(&mut self, white: i64, black: i64) {
        self.white -= white;
        self.black -= black;
    }

    fn totals(&self) -> Result<StateTotals> {
        checked_totals(self.white as f64, self.black as f64)
    }
}

/// Generate the counties of one state under `policy`
///
/// Random and centered states split `population` into pools with
/// [`Pools::from_ratio`].
pub fn generate_counties(
    policy: Policy,
    population: i64,
    ratio: f64,
    params: &GenerationParams,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<County>> {
    match policy {
        Policy::Uniform => generate_uniform(population, ratio, params, rng),
        Policy::Random => generate_random(Pools::from_ratio(population, ratio), params, rng),
        Policy::Centered => {
            generate_centered(Pools::from_ratio(population, ratio), ratio, params, rng)
        }
    }
}

/// Every county gets the state ratio, applied without rounding
pub fn generate_uniform(
    population: i64,
    ratio: f64,
    params: &GenerationParams,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<County>> {
    if population < 1 {
        return Ok(Vec::new());
    }
    let state_white = population as f64 * ratio;
    let totals = checked_totals(state_white, population as f64 - state_white)?;

    let mut counties = Vec::new();
    let mut remaining = population;
    while remaining >= 1 {
        let size = rng.gen_range(params.min_county_size..=params.max_county_size);
        let white = size as f64 * ratio;
        let black = size as f64 - white;
        remaining -= size as i64;
        counties.push(County {
            white,
            black,
            population: size,
            ratio,
            unevenness: totals.unevenness(white, black),
            neighbors: None,
        });
    }

    // Last county overdrew the state
    counties.pop();
    Ok(counties)
}

/// Each county draws an independent ratio from `params.county_ratio`
pub fn generate_random(
    mut pools: Pools,
    params: &GenerationParams,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<County>> {
    if pools.remaining() < 1 {
        return Ok(Vec::new());
    }
    let totals = pools.totals()?;

    let mut counties = Vec::new();
    while pools.remaining() >= 1 {
        let size = rng.gen_range(params.min_county_size..=params.max_county_size);
        let ratio = rng.gen_range(params.county_ratio.low..params.county_ratio.high);
        let white = (size as f64 * ratio).round_ties_even() as i64;
        let black = size as i64 - white;
        pools.withdraw(white, black);
        counties.push(County {
            white: white as f64,
            black: black as f64,
            population: size,
            ratio,
            unevenness: totals.unevenness(white as f64, black as f64),
            neighbors: None,
        });
    }

    counties.pop();
    Ok(counties)
}

/// County ratios follow `N(ratio, ratio / divisor)`; each county also gets
/// simulated neighbor statistics and a Logan-Parman index
pub fn generate_centered(
    mut pools: Pools,
    ratio: f64,
    params: &GenerationParams,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<County>> {
    if pools.remaining() < 1 {
        return Ok(Vec::new());
    }
    let totals = pools.totals()?;

    let mut counties = Vec::new();
    while pools.remaining() >= 1 {
        let size = rng.gen_range(params.centered_min_county_size..=params.max_county_size);
        let z: f64 = rng.sample(StandardNormal);
        let county_ratio = ratio + z * ratio / params.centered_spread_divisor;
        let white = (size as f64 * county_ratio).round_ties_even() as i64;
        let black = size as i64 - white;
        pools.withdraw(white, black);

        let expected = expected_neighbors(white as f64, black as f64, size as i64)?;
        let actual = simulate_actual(expected, rng);
        let index = logan_parman(expected, actual, params.index_denominator_shift)?;

        counties.push(County {
            white: white as f64,
            black: black as f64,
            population: size,
            ratio: county_ratio,
            unevenness: totals.unevenness(white as f64, black as f64),
            neighbors: Some(NeighborStats { expected, actual, logan_parman: index }),
        });
    }

    counties.pop();
    Ok(counties)
}

fn checked_totals(white: f64, black: f64) -> Result<StateTotals> {
    if white == 0.0 {
        return Err(SimError::EmptyGroup("white"));
    }
    if black == 0.0 {
        return Err(SimError::EmptyGroup("black"));
    }
    Ok(StateTotals::new(white, black))
}
