//! xorshift64* state transition behind [`crate::SeededRng`].

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const XORSHIFT_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Replacement for an all-zero state, which xorshift never leaves.
const NONZERO_STATE: u64 = GOLDEN_GAMMA;

/// SplitMix64 finalizer. Spreads nearby seeds (0, 1, 2, ...) across the
/// whole state space.
pub fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn nonzero(state: u64) -> u64 {
    if state == 0 {
        NONZERO_STATE
    } else {
        state
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    /// Current state word. Never zero.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl rand::RngCore for Xorshift64Star {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(XORSHIFT_MULTIPLIER)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Xorshift64StarSeed(pub [u8; 8]);

impl AsMut<[u8]> for Xorshift64StarSeed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl rand::SeedableRng for Xorshift64Star {
    type Seed = Xorshift64StarSeed;

    /// Raw state bytes, little-endian. Only the zero state is remapped.
    fn from_seed(seed: Xorshift64StarSeed) -> Self {
        Self {
            state: nonzero(u64::from_le_bytes(seed.0)),
        }
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self {
            state: nonzero(splitmix64(seed)),
        }
    }
}
