// ABOUTME: Injectable randomness used by the meal and session composers
// ABOUTME: Blanket-implemented for every rand::Rng so callers can pass seeded generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::seq::index;
use rand::Rng;

/// Source of the random choices made while composing plans
///
/// Composers never touch a global generator. Pass a seeded
/// `rand_chacha::ChaCha8Rng` to get reproducible plans.
pub trait RandomSource {
    /// Uniform index in `0..len`, `None` when `len` is zero
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    /// Up to `amount` distinct indices in `0..len`
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;

    /// Uniform value in the closed interval `[low, high]`
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.gen_range(0..len))
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(self, len, amount.min(len)).into_vec()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Pick one element of `items` uniformly
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    rng.pick_index(items.len()).and_then(|i| items.get(i))
}

/// Pick up to `amount` distinct elements of `items`
pub fn choose_many<T, R>(rng: &mut R, items: &[T], amount: usize) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    rng.sample_indices(items.len(), amount)
        .into_iter()
        .filter_map(|i| items.get(i).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.pick_index(0), None);
        assert!(rng.sample_indices(0, 3).is_empty());
        assert!(choose::<u8, _>(&mut rng, &[]).is_none());
    }

    #[test]
    fn test_sample_is_distinct_and_capped() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut picked = rng.sample_indices(4, 10);
        assert_eq!(picked.len(), 4);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let value = rng.uniform(0.95, 1.05);
            assert!((0.95..=1.05).contains(&value));
        }
        assert!((rng.uniform(1.0, 1.0) - 1.0).abs() < f64::EPSILON);
    }
}
