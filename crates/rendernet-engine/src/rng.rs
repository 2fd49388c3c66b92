//! Explicit, seedable randomness.
//!
//! Every stochastic decision in a run goes through one [`RandomSource`]
//! owned by the engine: the per-tick activation order, every node
//! availability check, and the pick among available nodes. Nothing
//! reads a global RNG, so a seed fully determines a run.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws, uniform picks, and permutations.
///
/// Object-safe so that tests can substitute scripted sources behind
/// `&mut dyn RandomSource`.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Permute `order` in place.
    fn shuffle(&mut self, order: &mut [usize]);

    /// A uniform integer in `lo..hi`. Requires `lo < hi`.
    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo < hi, "empty range {lo}..{hi}");
        // Both bounds are u32, so the span and the offset fit in u32.
        lo + self.choose_index((hi - lo) as usize) as u32
    }

    /// A uniform real in `[lo, hi)`. Requires `lo < hi`.
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.uniform() * (hi - lo)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        (**self).shuffle(order)
    }

    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).range_u32(lo, hi)
    }

    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).range_f64(lo, hi)
    }
}

/// Pick one element of `items` uniformly, or `None` if it is empty.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.choose_index(items.len()))
}

/// Production [`RandomSource`] backed by a seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Create a source whose whole stream is determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        order.shuffle(&mut self.rng);
    }

    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..hi)
    }
}
