//! Uniform sampling without replacement.

use rand::Rng;

/// Shuffle `items` in place (Fisher-Yates, from the back).
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Take `count` distinct items in random order.
///
/// The whole input is shuffled before truncating, so every subset is equally
/// likely. Asking for more items than exist returns all of them.
pub fn sample_without_replacement<T, R>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    shuffle(&mut items, rng);
    items.truncate(count);
    items
}
