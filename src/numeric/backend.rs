// ============================================================================
// Big-Integer Backend
// The single arithmetic interface the fixed-point engine is written against
// ============================================================================
//
// The backend is fixed at compile time. Everything in `numeric` goes through
// the items re-exported here, so swapping the integer implementation only
// touches this file.

use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand::{CryptoRng, RngCore};

pub use num_bigint::{BigInt, Sign};

/// Name of the active big-integer implementation.
pub const BACKEND_NAME: &str = "num-bigint";

/// Compute 10^n.
#[inline]
pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Multiply `value` by 10^digits.
#[inline]
pub fn scale_up(value: &BigInt, digits: u32) -> BigInt {
    if digits == 0 {
        value.clone()
    } else {
        value * pow10(digits)
    }
}

/// Floor division and modulo (quotient rounds toward negative infinity,
/// remainder takes the sign of the divisor).
#[inline]
pub fn div_mod_floor(dividend: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
    dividend.div_mod_floor(divisor)
}

/// Truncating division of magnitudes: returns `(|a| / |b|, |a| % |b|)`.
#[inline]
pub fn div_rem_magnitude(dividend: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
    dividend.abs().div_rem(&divisor.abs())
}

/// Uniform draw from `[0, bound)`.
///
/// # Panics
/// Panics if `bound` is not positive.
pub fn random_below<R: RngCore + CryptoRng>(rng: &mut R, bound: &BigInt) -> BigInt {
    assert!(bound.is_positive(), "random bound must be positive");
    rng.gen_bigint_range(&BigInt::zero(), bound)
}

/// Uniform draw from `[low, high)`.
///
/// # Panics
/// Panics if `low >= high`.
pub fn random_in_range<R: RngCore + CryptoRng>(
    rng: &mut R,
    low: &BigInt,
    high: &BigInt,
) -> BigInt {
    assert!(low < high, "random range must be non-empty");
    rng.gen_bigint_range(low, high)
}
