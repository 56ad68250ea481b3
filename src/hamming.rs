//! Batch Hamming distance over paired `u64` words.

use crate::error::{Error, Result};

#[inline]
fn word_distance(a: u64, b: u64) -> u64 {
    u64::from((a ^ b).count_ones())
}

fn check_lengths(a: &[u64], b: &[u64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Sum of `popcount(a[i] ^ b[i])`. Lengths are not checked here.
///
/// 4x unrolled, scalar tail.
fn reduce(a: &[u64], b: &[u64]) -> u64 {
    let full = a.len() / 4 * 4;
    let mut total = 0u64;
    for (xa, xb) in a[..full].chunks_exact(4).zip(b[..full].chunks_exact(4)) {
        total += word_distance(xa[0], xb[0]);
        total += word_distance(xa[1], xb[1]);
        total += word_distance(xa[2], xb[2]);
        total += word_distance(xa[3], xb[3]);
    }
    for (&xa, &xb) in a[full..].iter().zip(&b[full..]) {
        total += word_distance(xa, xb);
    }
    total
}

/// Total number of differing bits between `a` and `b`, element by element.
///
/// Fails with [`Error::SizeMismatch`] before touching any element when the
/// slices differ in length. Empty inputs yield 0.
pub fn hamming_distance_batch(a: &[u64], b: &[u64]) -> Result<u64> {
    check_lengths(a, b)?;
    Ok(reduce(a, b))
}

/// Owns a validated pair of equal-length word vectors.
///
/// ```
/// use numbind::HammingDistanceCalculator;
///
/// // 5 ^ 1 = 0b100, 3 ^ 7 = 0b100
/// let calc = HammingDistanceCalculator::new(vec![5, 3], vec![1, 7]).unwrap();
/// assert_eq!(calc.calculate(), 2);
/// assert_eq!(calc.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingDistanceCalculator {
    a: Vec<u64>,
    b: Vec<u64>,
}

impl HammingDistanceCalculator {
    pub fn new(a: Vec<u64>, b: Vec<u64>) -> Result<Self> {
        check_lengths(&a, &b)?;
        log::debug!("hamming calculator over {} word pairs", a.len());
        Ok(Self { a, b })
    }

    pub fn calculate(&self) -> u64 {
        reduce(&self.a, &self.b)
    }

    /// Number of word pairs.
    pub fn size(&self) -> usize {
        self.a.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_popcount() {
        let calc = HammingDistanceCalculator::new(vec![0x1248], vec![0x0000]).unwrap();
        assert_eq!(calc.calculate(), 4);
        assert_eq!(calc.size(), 1);
    }

    #[test]
    fn known_three_word_total() {
        let a = vec![0x1234567890ABCDEF, u64::MAX, 0];
        let b = vec![0xFEDCBA0987654321, 0, u64::MAX];
        // 36 + 64 + 64
        assert_eq!(hamming_distance_batch(&a, &b).unwrap(), 164);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = HammingDistanceCalculator::new(vec![1, 2, 3], vec![1, 2]).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { left: 3, right: 2 }));
        assert!(hamming_distance_batch(&[], &[1]).is_err());
    }

    #[test]
    fn empty_inputs_are_zero() {
        assert_eq!(hamming_distance_batch(&[], &[]).unwrap(), 0);
        let calc = HammingDistanceCalculator::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(calc.calculate(), 0);
        assert_eq!(calc.size(), 0);
    }

    #[test]
    fn unrolled_and_tail_paths_agree() {
        // lengths around the unroll width exercise both loops
        for len in 0..11 {
            let a: Vec<u64> = (0..len).map(|i| i * 0x0101_0101).collect();
            let b: Vec<u64> = (0..len).map(|i| !i).collect();
            let expected: u64 = a
                .iter()
                .zip(&b)
                .map(|(x, y)| u64::from((x ^ y).count_ones()))
                .sum();
            assert_eq!(hamming_distance_batch(&a, &b).unwrap(), expected, "len {len}");
        }
    }
}
