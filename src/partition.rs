//! Random partition of a total into positive parts

use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{Result, SimError};

/// Split `total` into `parts` positive integers that sum to `total`
///
/// Draws `parts - 1` distinct cut points from `[1, total - 1]`, sorts them,
/// and returns the gaps between consecutive cuts (with 0 and `total` as the
/// outer bounds). Fails when `total < parts` or `parts == 0`.
pub fn randomly_distribute(total: u64, parts: usize, rng: &mut ChaCha8Rng) -> Result<Vec<u64>> {
    if parts == 0 || total < parts as u64 {
        return Err(SimError::InsufficientTotal { total, parts });
    }

    let mut cuts: Vec<u64> = index::sample(rng, (total - 1) as usize, parts - 1)
        .into_iter()
        .map(|i| i as u64 + 1)
        .collect();
    cuts.sort_unstable();
    cuts.push(total);

    let mut previous = 0;
    let distribution = cuts
        .into_iter()
        .map(|cut| {
            let part = cut - previous;
            previous = cut;
            part
        })
        .collect();

    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_distribute_hundred_into_five() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let parts = randomly_distribute(100, 5, &mut rng).unwrap();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts.iter().sum::<u64>(), 100);
        assert!(parts.iter().all(|&p| p > 0));
    }

    #[test]
    fn test_total_below_parts_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(matches!(
            randomly_distribute(3, 5, &mut rng),
            Err(SimError::InsufficientTotal { total: 3, parts: 5 })
        ));
        assert!(randomly_distribute(10, 0, &mut rng).is_err());
    }

    #[test]
    fn test_total_equal_to_parts_gives_ones() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(randomly_distribute(4, 4, &mut rng).unwrap(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_single_part_is_whole_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(randomly_distribute(37, 1, &mut rng).unwrap(), vec![37]);
    }
}
