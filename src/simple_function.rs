//! Addition helpers exported alongside the generator.

use std::ops::Add;

/// `a + b`, wrapping on overflow.
pub fn add_integers(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn add_doubles(a: f64, b: f64) -> f64 {
    a + b
}

pub fn add_generic<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(add_integers(5, 3), 8);
        assert_eq!(add_integers(-4, 4), 0);
        assert_eq!(add_integers(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn doubles() {
        assert!((add_doubles(5.5, 3.2) - 8.7).abs() < 1e-10);
    }

    #[test]
    fn generic() {
        assert_eq!(add_generic(10, 20), 30);
        assert!((add_generic(7.7f64, 2.3) - 10.0).abs() < 1e-10);
        assert_eq!(add_generic(1u64 << 40, 1), (1u64 << 40) + 1);
    }
}
