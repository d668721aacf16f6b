//! Random product sampling for the home page rail.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Product;

/// Pick up to `count` products uniformly at random, in random order.
/// Generic over the RNG so tests can seed it.
pub fn random_sample<R: Rng + ?Sized>(
    products: &[Product],
    count: usize,
    rng: &mut R,
) -> Vec<Product> {
    let mut pool = products.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
