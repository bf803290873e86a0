//! Math utility functions.

use num_traits::{Float, NumCast, PrimInt};

/// Returns true if the value is close enough to zero to be considered zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Round `value` to two decimal places.
pub fn round_hundredths<T: Float>(value: T) -> T {
    let hundred = <T as NumCast>::from(100).unwrap_or_else(T::one);
    (value * hundred).round() / hundred
}

/// Greatest common divisor using Euclid's algorithm. `gcd(a, 0) == a`.
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    if b.is_zero() {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Greatest common divisor of all the non-zero values. Returns one when no
/// non-zero values are present so that it is always safe to divide by.
pub fn gcd_all<T: PrimInt>(values: &[T]) -> T {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_zero())
        .reduce(gcd)
        .unwrap_or_else(T::one)
}
