//! Seeded pseudo-random generator with a reproducibility contract.
//!
//! A [`SeededRng`] is fully determined by the seed it was built or last
//! reseeded with: two generators given the same seed produce the same draws,
//! and [`SeededRng::set_seed`] is indistinguishable from constructing a new
//! generator. Draws from [`SeededRng::next`] lie strictly inside `(0, 1)`.
//!
//! The generator carries no synchronization. Wrap it in a `Mutex` to share
//! one instance between threads; separate instances never interfere.
//!
//! ```
//! use numbind::SeededRng;
//!
//! let mut rng = SeededRng::new(42);
//! let first = [rng.next(), rng.next(), rng.next()];
//! rng.set_seed(42);
//! assert_eq!(first, [rng.next(), rng.next(), rng.next()]);
//! ```

use crate::xorshift::Xorshift64Star;
use rand::{RngCore, SeedableRng};

/// Mantissa bits kept from each raw draw.
const MANTISSA_BITS: u32 = 52;
/// `2^-52`, the spacing of the output grid.
const UNIT: f64 = 1.0 / (1u64 << MANTISSA_BITS) as f64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    core: Xorshift64Star,
}

impl SeededRng {
    /// Builds a generator whose whole output is determined by `seed`.
    /// Every seed is valid, 0 included.
    pub fn new(seed: u64) -> Self {
        log::trace!("seeding generator with {seed}");
        Self {
            core: Xorshift64Star::seed_from_u64(seed),
        }
    }

    /// Discards the current state and starts over from `seed`, exactly as
    /// [`SeededRng::new`] would.
    pub fn set_seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Advances one step and returns a draw in the open interval `(0, 1)`.
    ///
    /// The top 52 bits `m` of the raw draw map to `(m + 0.5) * 2^-52`, so
    /// the smallest value is `2^-53` and the largest `1 - 2^-53`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let m = self.core.next_u64() >> (u64::BITS - MANTISSA_BITS);
        (m as f64 + 0.5) * UNIT
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.core.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.core.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.core.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.core.try_fill_bytes(dest)
    }
}
