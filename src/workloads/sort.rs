//! Comparison sort over a seeded pseudo-random sequence.

use crate::rng::Mt19937;
use anyhow::{ensure, Result};

/// Generator seed for the sort input.
pub const SEED: u32 = 42;

/// `n` raw outputs of an MT19937 stream seeded with `seed`.
pub fn random_values(n: usize, seed: u32) -> Vec<u32> {
    Mt19937::new(seed).take(n).collect()
}

/// Sort `n` seeded pseudo-random values ascending and return the element at
/// index `n / 2`.
pub fn sort_median(n: usize) -> Result<u64> {
    ensure!(n > 0, "sort benchmark needs at least one element");
    let mut values = random_values(n, SEED);
    values.sort_unstable();
    Ok(u64::from(values[n / 2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn counts(values: &[u32]) -> HashMap<u32, usize> {
        let mut map = HashMap::new();
        for &v in values {
            *map.entry(v).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn should_sort_into_non_decreasing_permutation() {
        let input = random_values(10_000, SEED);
        let mut sorted = input.clone();
        sorted.sort_unstable();

        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(counts(&input), counts(&sorted));
    }

    #[test]
    fn should_return_element_at_middle_index() {
        for n in [1, 2, 5, 1000, 1001] {
            let mut sorted = random_values(n, SEED);
            sorted.sort_unstable();
            assert_eq!(sort_median(n).unwrap(), u64::from(sorted[n / 2]));
        }
    }

    #[test]
    fn should_use_first_draw_when_single_element() {
        assert_eq!(
            sort_median(1).unwrap(),
            u64::from(Mt19937::new(SEED).next_u32())
        );
    }

    #[test]
    fn should_fail_when_sequence_is_empty() {
        assert!(sort_median(0).is_err());
    }
}
