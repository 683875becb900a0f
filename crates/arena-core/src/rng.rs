//! Seeded RNG wrapper.
//!
//! Every consumer of randomness (the factory placing creatures, the mover
//! picking directions) owns its own `ArenaRng`.  Background threads get a
//! child derived from the root so no RNG is ever shared or locked.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A small, fast, seedable RNG.
///
/// Not `Sync`: hand each thread its own via [`child`](Self::child).
pub struct ArenaRng(SmallRng);

impl ArenaRng {
    pub fn new(seed: u64) -> Self {
        ArenaRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent RNG, e.g. one per background thread.
    pub fn child(&mut self, offset: u64) -> ArenaRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        ArenaRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
