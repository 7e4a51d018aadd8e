use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Picks `count` distinct integers uniformly from `min..=max`, in no particular order.
///
/// Uses Floyd's algorithm, so exactly `count` draws are made however much of the range is requested.
pub fn unique_random_integers<R: Rng + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
    count: usize,
) -> Result<Vec<u32>> {
    if min > max {
        return Err(GameError::InvalidRange);
    }

    let span = u64::from(max - min) + 1;
    let requested = u64::try_from(count).map_err(|_| GameError::TooManyValues)?;
    if requested > span {
        return Err(GameError::TooManyValues);
    }

    let mut seen = BTreeSet::new();
    let mut picked = Vec::with_capacity(count);
    for upper in (span - requested)..span {
        let candidate = rng.random_range(0..=upper);
        // `upper` is larger than anything inserted so far
        let offset = if seen.insert(candidate) {
            candidate
        } else {
            seen.insert(upper);
            upper
        };
        picked.push(min + offset as u32);
    }

    Ok(picked)
}

/// Returns a uniformly random permutation of `items`, walking backwards and swapping each slot with one at or
/// before it.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
