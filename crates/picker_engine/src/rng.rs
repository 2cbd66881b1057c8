//! Random number generation for the sampling kernel.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Selection engine random number generator.
///
/// A thin wrapper around a non-cryptographic PRNG seeded from operating
/// system entropy. Reproducibility is explicitly not a goal of this engine,
/// so no seeding constructor or seed accessor is exposed; every generator
/// starts from a fresh entropy draw. Callers create one and thread it
/// through the sampling functions as `&mut` so a single request consumes a
/// single stream.
///
/// # Examples
///
/// ```rust
/// use picker_engine::rng::PickRng;
///
/// let mut rng = PickRng::new();
/// let index = rng.index(6);
/// assert!(index < 6);
///
/// let face = rng.int_inclusive(1, 6);
/// assert!((1..=6).contains(&face));
/// ```
pub struct PickRng {
    inner: SmallRng,
}

impl PickRng {
    /// Creates a generator seeded from operating-system entropy.
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
        }
    }

    /// Draws a uniform index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. Request validation guarantees every pool is
    /// non-empty before a draw happens, so this never fires on the
    /// validated path.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Draws a uniform integer in `[min, max]` inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Request validation rejects inverted bounds
    /// with `MinExceedsMax` before a draw happens.
    #[inline]
    pub fn int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.inner.gen_range(min..=max)
    }
}

impl Default for PickRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_stays_in_range() {
        let mut rng = PickRng::new();
        for _ in 0..10_000 {
            assert!(rng.index(6) < 6);
        }
    }

    #[test]
    fn test_index_of_singleton_pool() {
        let mut rng = PickRng::new();
        for _ in 0..100 {
            assert_eq!(rng.index(1), 0);
        }
    }

    #[test]
    fn test_int_inclusive_hits_both_endpoints() {
        let mut rng = PickRng::new();
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..10_000 {
            match rng.int_inclusive(1, 6) {
                1 => seen_min = true,
                6 => seen_max = true,
                v => assert!((1..=6).contains(&v)),
            }
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = PickRng::new();
        for _ in 0..100 {
            assert_eq!(rng.int_inclusive(7, 7), 7);
        }
    }

    #[test]
    fn test_negative_bounds() {
        let mut rng = PickRng::new();
        for _ in 0..1_000 {
            let v = rng.int_inclusive(-10, -5);
            assert!((-10..=-5).contains(&v));
        }
    }
}
