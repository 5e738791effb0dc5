//! Sampling without replacement
//!
//! Uses a partial Fisher-Yates shuffle, so every ordered selection of
//! `count` positions is equally likely.

use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `min(count, pool.len())` items from distinct positions of `pool`
/// in uniformly random order
///
/// The pool itself is never reordered; sampling works on a copy.
pub fn sample<T, R>(pool: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = count.min(pool.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut items = pool.to_vec();
    let (chosen, _) = items.partial_shuffle(rng, amount);
    chosen.to_vec()
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod sampler_tests;
