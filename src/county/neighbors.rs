//! Neighbor exposure formulas
//!
//! The expected count of black residents with at least one white neighbor
//! assumes each resident's two neighbors are drawn without replacement from
//! the rest of the population.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{Result, SimError};

/// `e = b * ((w - 1) / (n - 1)) * ((w - 2) / (n - 2))`
///
/// Undefined for `n <= 2`. Negative `white` or `black` values are passed
/// through unchanged.
pub fn expected_neighbors(white: f64, black: f64, population: i64) -> Result<f64> {
    if population <= 2 {
        return Err(SimError::DegeneratePopulation(population));
    }
    let n = population as f64;
    Ok(black * ((white - 1.0) / (n - 1.0)) * ((white - 2.0) / (n - 2.0)))
}

/// Draw an "actual" neighbor count uniformly from `[0, round(e)]`
///
/// Non-positive expectations yield 0.
pub fn simulate_actual(expected: f64, rng: &mut ChaCha8Rng) -> u64 {
    if expected > 0.0 {
        let upper = expected.round_ties_even() as u64;
        rng.gen_range(0..=upper)
    } else {
        0
    }
}

/// `(e - actual) / (e - shift)`
///
/// Fails when `e` equals the shift exactly. The shift of 2 used by the
/// experiment is kept as-is.
pub fn logan_parman(expected: f64, actual: u64, shift: f64) -> Result<f64> {
    let denominator = expected - shift;
    if denominator == 0.0 {
        return Err(SimError::UndefinedIndex(expected));
    }
    Ok((expected - actual as f64) / denominator)
}
