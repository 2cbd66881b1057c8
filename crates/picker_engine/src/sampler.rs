//! The two sampling disciplines.
//!
//! - **With replacement** ([`draw_indices`], [`draw_integers`]): `count`
//!   independent uniform draws with no state carried between them.
//!   Duplicates are expected and unconstrained.
//! - **Without replacement** ([`shuffle_take`]): a partial Fisher-Yates
//!   shuffle of the effective pool followed by taking its first `count`
//!   elements. Every permutation of the pool is equally likely, so this is
//!   uniform without-replacement sampling; it differs materially from
//!   drawing-and-rejecting, which biases nothing but wastes draws and
//!   cannot bound its running time.
//!
//! Samplers never fail on validated input: the validator has already
//! guaranteed non-empty pools, ordered bounds and a count that fits.

use crate::rng::PickRng;

/// Draws `count` independent uniform indices into a pool of `pool_len`
/// items, with replacement.
pub fn draw_indices(rng: &mut PickRng, pool_len: usize, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.index(pool_len)).collect()
}

/// Draws `count` independent uniform integers in `[min, max]` inclusive,
/// with replacement.
pub fn draw_integers(rng: &mut PickRng, min: i64, max: i64, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.int_inclusive(min, max)).collect()
}

/// Draws `count` distinct items from `pool` without replacement.
///
/// Walks the pool from its last index down to 1, swapping each position
/// with a uniform index in `[0, current]`, then truncates to the first
/// `count` elements. Distinctness holds at the pool-index level: if the
/// pool contains duplicate values, the result may too.
///
/// # Examples
///
/// ```rust
/// use picker_engine::rng::PickRng;
/// use picker_engine::sampler::shuffle_take;
///
/// let mut rng = PickRng::new();
/// let picked = shuffle_take(&mut rng, &[10, 20, 30, 40], 2);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn shuffle_take<T: Clone>(rng: &mut PickRng, pool: &[T], count: usize) -> Vec<T> {
    debug_assert!(count <= pool.len());
    let mut shuffled = pool.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled.truncate(count);
    shuffled
}
