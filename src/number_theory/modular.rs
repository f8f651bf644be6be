// ============================================================================
// Modular Arithmetic
// Inverses, exponentiation and gcd helpers over big integers
// ============================================================================

use crate::numeric::backend::div_mod_floor;
use crate::numeric::{BigInt, NumericError, NumericResult};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Inverse of `value` modulo `modulus`, in `[0, |modulus|)`.
///
/// # Errors
/// `DivisionByZero` if the inverse does not exist (including a zero modulus).
pub fn modular_inverse(value: &BigInt, modulus: &BigInt) -> NumericResult<BigInt> {
    if modulus.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let modulus = modulus.abs();
    let reduced = value.mod_floor(&modulus);

    let (gcd, inverse, _) = extended_gcd(&reduced, &modulus);
    if !gcd.is_one() {
        tracing::debug!(%reduced, %modulus, "inverse does not exist");
        return Err(NumericError::DivisionByZero);
    }
    Ok(inverse.mod_floor(&modulus))
}

/// `base^exponent mod modulus`, in `[0, |modulus|)`.
///
/// A negative exponent raises the modular inverse of `base`.
///
/// # Errors
/// `DivisionByZero` for a zero modulus, or a negative exponent with a base
/// that is not invertible.
pub fn modular_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> NumericResult<BigInt> {
    if modulus.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let modulus = modulus.abs();

    let result = if exponent.is_negative() {
        modular_inverse(base, &modulus)?.modpow(&-exponent, &modulus)
    } else {
        base.mod_floor(&modulus).modpow(exponent, &modulus)
    };
    Ok(result.mod_floor(&modulus))
}

/// Extended Euclidean algorithm.
///
/// Returns `(gcd, x, y)` with `a*x + b*y = gcd` and `gcd >= 0`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (quotient, next_r) = div_mod_floor(&old_r, &r);
        old_r = std::mem::replace(&mut r, next_r);
        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);
        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    if old_r.is_negative() {
        (-old_r, -old_x, -old_y)
    } else {
        (old_r, old_x, old_y)
    }
}

/// Least common multiple, always non-negative.
#[inline]
pub fn least_common_multiple(a: &BigInt, b: &BigInt) -> BigInt {
    a.lcm(b)
}
