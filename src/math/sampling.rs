//! Seeded random sampling for reproducible stochastic choices
//!
//! Every partition run and every grid solve owns its own [`RandomSource`]
//! constructed from the run seed; no RNG state is ever shared across runs.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fold a seed token into a 64-bit RNG seed using FNV-1a
///
/// The fold is explicit rather than hash-map based so the mapping is stable
/// across platforms and releases; reproducibility of a published seed token
/// depends on it.
pub fn seed_from_token(token: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for byte in token.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Seeded random source for reproducible stochastic choices
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source from a numeric seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a deterministic random source from a seed token
    pub fn from_token(token: &str) -> Self {
        Self::new(seed_from_token(token))
    }

    /// Uniform draw from `[0, 1)`
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Fair coin flip
    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Uniform draw from the inclusive range `[min, max]`
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform index draw from `0..len`
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Generic weighted random selection
    ///
    /// Returns an index into the weights array using the cumulative
    /// distribution. Falls back to index 0 when the total weight is not
    /// positive and to the final index on floating-point underrun.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Draw `count` distinct indices uniformly from `0..len`
    ///
    /// Uses a partial Fisher-Yates shuffle; the returned order is the draw
    /// order, not sorted. Returns all indices when `count >= len`.
    pub fn sample_distinct(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        let take = count.min(len);

        for i in 0..take {
            let j = i + self.pick_index(len - i);
            indices.swap(i, j);
        }

        indices.truncate(take);
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, seed_from_token};

    #[test]
    fn test_seed_fold_is_stable() {
        assert_eq!(seed_from_token("abc123"), seed_from_token("abc123"));
        assert_ne!(seed_from_token("abc123"), seed_from_token("abc124"));
    }

    #[test]
    fn test_identical_seeds_replay_draws() {
        let mut a = RandomSource::from_token("seed1");
        let mut b = RandomSource::from_token("seed1");

        for _ in 0..32 {
            assert!((a.uniform() - b.uniform()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_weighted_choice_respects_zero_weights() {
        let mut source = RandomSource::new(7);
        for _ in 0..64 {
            let choice = source.weighted_choice(&[0.0, 1.0, 0.0]);
            assert_eq!(choice, 1);
        }
    }

    #[test]
    fn test_sample_distinct_yields_unique_indices() {
        let mut source = RandomSource::new(11);
        let mut drawn = source.sample_distinct(10, 4);
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 4);
        assert!(drawn.iter().all(|&i| i < 10));
    }
}
