// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle items uniformly at random and keep at most `n` of them
///
/// Requesting more items than are available returns every item in a
/// shuffled order.
///
/// # Arguments
///
/// * `items` - Items to sample from
/// * `n` - Maximum number of items to keep
/// * `rng` - Source of randomness
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use glimpse_core::ut::sample::sample;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample((0..10).collect(), 3, &mut rng);
///
/// assert_eq!(picked.len(), 3);
/// ```
pub fn sample<T, R>(mut items: Vec<T>, n: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items.truncate(n);
    items
}
