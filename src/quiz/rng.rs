//! Seeded random source for question generation
//!
//! The engine never touches ambient randomness: every archetype receives a
//! `&mut QuizRng`. Two engines built from the same seed produce the same
//! question sequence.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Serializable description of a random source (seed only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    /// Largest integer a JS number holds exactly (2^53 - 1)
    pub const MAX_JS_SEED: f64 = 9_007_199_254_740_991.0;

    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a JS number. Only whole, non-negative, exactly
    /// representable values are accepted.
    pub fn from_js_number(value: f64) -> Option<Self> {
        let whole = value.is_finite() && value.fract() == 0.0;
        (whole && (0.0..=Self::MAX_JS_SEED).contains(&value)).then(|| Self::new(value as u64))
    }

    pub fn to_rng(&self) -> QuizRng {
        QuizRng::seeded(self.seed)
    }
}

/// Uniform integer and ordering helpers over a PCG stream
#[derive(Debug, Clone)]
pub struct QuizRng {
    seed: u64,
    rng: Pcg32,
}

impl QuizRng {
    /// Create a deterministic source from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the platform clock / entropy
    pub fn from_entropy() -> Self {
        Self::seeded(entropy_seed())
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> RngState {
        RngState::new(self.seed)
    }

    /// Uniform integer in the closed interval `[min, max]`.
    ///
    /// Panics if `min > max`; callers guard their bounds.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "random_int called with empty range {min}..={max}");
        self.rng.random_range(min..=max)
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "index called with empty length");
        self.rng.random_range(0..len)
    }

    /// Pick one element of a non-empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Return a new vector with the same elements in uniformly random order
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle_in_place(&mut out);
        out
    }

    /// Fisher–Yates shuffle
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Pick `count` distinct elements (fewer if the slice is shorter)
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count);
        shuffled
    }
}

impl Default for QuizRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_int_stays_in_closed_range() {
        let mut rng = QuizRng::seeded(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let v = rng.random_int(-2, 3);
            assert!((-2..=3).contains(&v));
            seen_min |= v == -2;
            seen_max |= v == 3;
        }
        assert!(seen_min && seen_max, "both bounds should be reachable");
    }

    #[test]
    fn test_random_int_single_value() {
        let mut rng = QuizRng::seeded(1);
        assert_eq!(rng.random_int(4, 4), 4);
    }

    #[test]
    #[should_panic]
    fn test_random_int_rejects_inverted_range() {
        let mut rng = QuizRng::seeded(1);
        rng.random_int(5, 4);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = QuizRng::seeded(99);
        let items = [1, 2, 3, 4, 5, 6];
        let mut shuffled = rng.shuffle(&items);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // Each of the 6 orderings of 3 items should appear about 1/6 of the time
        let mut rng = QuizRng::seeded(2024);
        let mut counts = std::collections::HashMap::new();
        let trials = 6000;
        for _ in 0..trials {
            *counts.entry(rng.shuffle(&['a', 'b', 'c'])).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for &n in counts.values() {
            assert!((800..1200).contains(&n), "ordering frequency {n} is biased");
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = QuizRng::seeded(12345);
        let mut b = RngState::new(12345).to_rng();
        for _ in 0..50 {
            assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
        }
        assert_eq!(a.seed(), 12345);
    }

    #[test]
    fn test_seed_from_js_number() {
        assert_eq!(RngState::from_js_number(42.0), Some(RngState::new(42)));
        assert_eq!(RngState::from_js_number(0.0), Some(RngState::new(0)));
        assert_eq!(
            RngState::from_js_number(RngState::MAX_JS_SEED),
            Some(RngState::new(9_007_199_254_740_991))
        );
        for bad in [-1.0, 1.5, f64::NAN, f64::INFINITY, RngState::MAX_JS_SEED * 2.0] {
            assert_eq!(RngState::from_js_number(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_sample_is_distinct() {
        let mut rng = QuizRng::seeded(3);
        let picked = rng.sample(&[1, 2, 3, 4, 5], 3);
        assert_eq!(picked.len(), 3);
        let mut dedup = picked.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 3);
        assert_eq!(rng.sample(&[1, 2], 5).len(), 2);
    }
}
