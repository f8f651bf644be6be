// ============================================================================
// Rounding
// Round-half-away-from-zero precision changes
// ============================================================================

use super::backend::{div_rem_magnitude, pow10, scale_up, BigInt, Sign};
use num_traits::{One, Zero};

/// Re-express `value` (scaled by 10^current_precision) at `target_precision`.
///
/// Widening is exact. Narrowing drops the trailing
/// `current_precision - target_precision` digits of the magnitude and rounds
/// half away from zero, so `15 @ 1 -> 2`, `14 @ 1 -> 1` and `-15 @ 1 -> -2`.
pub fn round_to_precision(value: &BigInt, current_precision: u32, target_precision: u32) -> BigInt {
    if target_precision >= current_precision {
        return scale_up(value, target_precision - current_precision);
    }

    let to_reduce_by = current_precision - target_precision;
    let (truncated, dropped) = div_rem_magnitude(value, &pow10(to_reduce_by));

    // First digit below the cut decides the direction.
    let guard_digit = &dropped / pow10(to_reduce_by - 1);
    let magnitude = if guard_digit >= BigInt::from(5) {
        truncated + BigInt::one()
    } else {
        truncated
    };

    if !dropped.is_zero() {
        tracing::trace!(
            current_precision,
            target_precision,
            "rounding dropped non-zero digits"
        );
    }

    apply_sign(value.sign(), magnitude)
}

fn apply_sign(sign: Sign, magnitude: BigInt) -> BigInt {
    match sign {
        Sign::Minus => -magnitude,
        _ => magnitude,
    }
}
