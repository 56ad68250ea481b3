//! Straightforward versions of the native routines, written the way a
//! dynamically-typed host would: render each XOR as a binary string and count
//! the `'1'` characters. Used to cross-check and benchmark [`crate::hamming`].

use crate::error::{Error, Result};
use crate::generator::SeededRng;
use rand::Rng;

pub fn hamming_distance_batch(a: &[u64], b: &[u64]) -> Result<u64> {
    if a.len() != b.len() {
        return Err(Error::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| format!("{:b}", x ^ y).matches('1').count() as u64)
        .sum())
}

/// Two vectors of `size` random words each, fully determined by `seed`.
/// All of `a` is drawn before `b`.
pub fn generate_test_data(size: usize, seed: u64) -> (Vec<u64>, Vec<u64>) {
    let mut rng = SeededRng::new(seed);
    let a = (0..size).map(|_| rng.gen::<u64>()).collect();
    let b = (0..size).map(|_| rng.gen::<u64>()).collect();
    (a, b)
}
