// ============================================================================
// Fixed-Point Number
// Arbitrary-precision decimal fixed-point arithmetic with runtime precision
// ============================================================================

use super::backend::{pow10, scale_up, BigInt, Sign};
use super::errors::{NumericError, NumericResult};
use super::operand::Operand;
use super::rounding::round_to_precision;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal fixed-point number of arbitrary size and precision.
///
/// Represents `value × 10^-precision`, where `value` is an arbitrary-precision
/// integer. Encryption schemes operate on scaled integers, so plaintexts are
/// kept in this exact form instead of binary floating point.
///
/// Instances are immutable: every operation returns a new number.
///
/// # Equality
/// `==` is *weak*: `1.0` and `1.000` are equal. Use [`FixedPoint::strong_eq`]
/// to also require equal precision.
///
/// # Example
/// ```
/// use mpc_fixed_point::numeric::FixedPoint;
///
/// let x = FixedPoint::fxp("10.001234", None).unwrap();
/// assert_eq!(x.precision(), 6);
///
/// let y = FixedPoint::fxp("1234e-2", None).unwrap(); // 12.34
/// assert_eq!(x.checked_add(&y).unwrap().to_string(), "22.341234");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPoint {
    value: BigInt,
    precision: u32,
}

impl FixedPoint {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a scaled value and its precision, without conversion.
    #[inline]
    pub fn new(value: impl Into<BigInt>, precision: u32) -> Self {
        Self {
            value: value.into(),
            precision,
        }
    }

    /// Create a fixed-point from a string, integer, float or fixed-point.
    ///
    /// Without `target_precision` the precision is deduced from the input.
    /// With it, trailing zeros are added or the input is rounded half away
    /// from zero to reach the target.
    ///
    /// # Errors
    /// `InvalidFormat` for malformed strings and non-finite floats.
    pub fn fxp(input: impl Into<Operand>, target_precision: Option<u32>) -> NumericResult<Self> {
        input.into().into_fixed_point(target_precision)
    }

    /// Create from an integer, scaled to `target_precision` if given.
    pub fn from_integer(value: impl Into<BigInt>, target_precision: Option<u32>) -> Self {
        let value = value.into();
        match target_precision {
            None => Self::new(value, 0),
            Some(precision) => Self::new(scale_up(&value, precision), precision),
        }
    }

    /// Create from a float through its shortest round-trip decimal text, so
    /// `0.1` yields the same number as `"0.1"`.
    ///
    /// The text keeps a fractional digit for whole floats (`42.0` has
    /// precision 1) and switches to exponent form outside `[1e-4, 1e16)`.
    ///
    /// # Errors
    /// `InvalidFormat` for NaN and infinities.
    pub fn from_f64(value: f64, target_precision: Option<u32>) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidFormat);
        }
        Self::parse_with_precision(&format!("{:?}", value), target_precision)
    }

    /// Parse `[-]digits[.digits][e[-]digits]`.
    ///
    /// The precision of plain input is the length of its fractional part.
    /// In scientific form a negative exponent raises the precision and a
    /// positive exponent scales the value.
    ///
    /// # Errors
    /// `InvalidFormat` on whitespace, repeated points, stray characters or a
    /// malformed exponent.
    pub fn parse_with_precision(input: &str, target_precision: Option<u32>) -> NumericResult<Self> {
        if input.chars().any(char::is_whitespace) {
            return Err(NumericError::InvalidFormat);
        }

        let Some((mantissa, exponent)) = input.split_once(['e', 'E']) else {
            return Self::parse_decimal(input, target_precision);
        };

        let left = Self::parse_decimal(mantissa, None)?;
        let power: i64 = exponent.parse().map_err(|_| NumericError::InvalidFormat)?;
        let shift = u32::try_from(power.unsigned_abs()).map_err(|_| NumericError::InvalidFormat)?;

        let shifted = if power < 0 {
            let precision = left
                .precision
                .checked_add(shift)
                .ok_or(NumericError::InvalidFormat)?;
            Self::new(left.value, precision)
        } else {
            Self::new(scale_up(&left.value, shift), left.precision)
        };

        Ok(shifted.with_target(target_precision))
    }

    fn parse_decimal(input: &str, target_precision: Option<u32>) -> NumericResult<Self> {
        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) || int_part.len() + frac_part.len() == 0
        {
            return Err(NumericError::InvalidFormat);
        }

        let digits = [int_part, frac_part].concat();
        let magnitude =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidFormat)?;
        let value = if negative { -magnitude } else { magnitude };
        let implicit_precision =
            u32::try_from(frac_part.len()).map_err(|_| NumericError::InvalidFormat)?;

        Ok(Self::new(value, implicit_precision).with_target(target_precision))
    }

    /// Re-express at `target_precision`: exact when widening, rounded half
    /// away from zero when narrowing.
    pub fn with_precision(&self, target_precision: u32) -> Self {
        Self::new(
            round_to_precision(&self.value, self.precision, target_precision),
            target_precision,
        )
    }

    pub(crate) fn with_target(self, target_precision: Option<u32>) -> Self {
        match target_precision {
            Some(target) if target != self.precision => self.with_precision(target),
            _ => self,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The scaled integer numerator.
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Number of decimal digits right of the radix point.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Split into `(value, precision)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.value, self.precision)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// -1, 0 or 1 at precision 0.
    pub fn signum(&self) -> Self {
        Self::new(self.value.signum(), 0)
    }

    /// Absolute value, precision unchanged.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.precision)
    }

    // ========================================================================
    // Calibration
    // ========================================================================

    /// Bring all inputs to their maximum precision.
    ///
    /// Returns that precision and the rescaled numbers, in input order.
    /// Scaling only ever widens, so it is lossless.
    ///
    /// # Panics
    /// Panics if `fixed_points` is empty.
    pub fn calibrate(fixed_points: &[FixedPoint]) -> (u32, Vec<FixedPoint>) {
        let Some(max_precision) = fixed_points.iter().map(|x| x.precision).max() else {
            panic!("calibration requires at least one fixed-point");
        };
        let calibrated = fixed_points
            .iter()
            .map(|x| x.with_precision(max_precision))
            .collect();
        (max_precision, calibrated)
    }

    /// Scaled values of `self` and `other` at their common precision.
    fn calibrated_values(&self, other: &Self) -> (u32, BigInt, BigInt) {
        let max_precision = self.precision.max(other.precision);
        (
            max_precision,
            scale_up(&self.value, max_precision - self.precision),
            scale_up(&other.value, max_precision - other.precision),
        )
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition at the larger of the two precisions.
    ///
    /// # Errors
    /// Fails only if `rhs` cannot be converted.
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let rhs = rhs.into().into_fixed_point(None)?;
        Ok(self.add_fixed(&rhs))
    }

    /// Exact subtraction at the larger of the two precisions.
    ///
    /// # Errors
    /// Fails only if `rhs` cannot be converted.
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let rhs = rhs.into().into_fixed_point(None)?;
        Ok(self.sub_fixed(&rhs))
    }

    /// Multiplication, rounded half away from zero to the larger precision.
    ///
    /// `0.1 × 0.5 = 0.1` and `0.1 × 0.4 = 0.0`.
    ///
    /// # Errors
    /// Fails only if `rhs` cannot be converted.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let rhs = rhs.into().into_fixed_point(None)?;
        Ok(self.mul_fixed(&rhs))
    }

    /// Division, rounded half away from zero to the larger precision.
    ///
    /// The quotient is first taken with guard digits, then rounded, so
    /// `0.2 / 3.0 = 0.1`, `2 / 3 = 1` and `46 / 100 = 1`.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero at any precision.
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let rhs = rhs.into().into_fixed_point(None)?;
        self.div_fixed(&rhs)
    }

    pub(crate) fn add_fixed(&self, rhs: &Self) -> Self {
        let (precision, lhs, rhs) = self.calibrated_values(rhs);
        Self::new(lhs + rhs, precision)
    }

    pub(crate) fn sub_fixed(&self, rhs: &Self) -> Self {
        let (precision, lhs, rhs) = self.calibrated_values(rhs);
        Self::new(lhs - rhs, precision)
    }

    pub(crate) fn mul_fixed(&self, rhs: &Self) -> Self {
        let max_precision = self.precision.max(rhs.precision);
        let product = &self.value * &rhs.value;
        let value = round_to_precision(&product, self.precision + rhs.precision, max_precision);
        Self::new(value, max_precision)
    }

    pub(crate) fn div_fixed(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.value.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let max_precision = self.precision.max(rhs.precision);
        // Floor quotient at precision 2·pa + pb + 1, nudged by half the divisor
        let numerator = scale_up(&self.value, self.precision + 2 * rhs.precision + 1)
            + rhs.value.div_floor(&BigInt::from(2u32));
        let quotient = numerator.div_floor(&rhs.value);
        let guard_precision = 2 * self.precision + rhs.precision + 1;
        Ok(Self::new(
            round_to_precision(&quotient, guard_precision, max_precision),
            max_precision,
        ))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Exact equality of both value and precision.
    #[inline]
    pub fn strong_eq(&self, other: &Self) -> bool {
        self.precision == other.precision && self.value == other.value
    }

    /// Weak equality against any convertible operand.
    ///
    /// A fixed-point operand is compared at the common precision; any other
    /// operand is first converted at `self`'s precision, so `1.23 == 1.234`.
    ///
    /// # Errors
    /// Fails only if `other` cannot be converted.
    pub fn checked_eq(&self, other: impl Into<Operand>) -> NumericResult<bool> {
        match other.into() {
            Operand::Fixed(fixed) => Ok(*self == fixed),
            operand => {
                let other = operand.into_fixed_point(Some(self.precision))?;
                Ok(self.value == other.value)
            },
        }
    }

    /// Ordering against any convertible operand, at the common precision.
    ///
    /// # Errors
    /// Fails only if `other` cannot be converted.
    pub fn checked_cmp(&self, other: impl Into<Operand>) -> NumericResult<Ordering> {
        let other = other.into().into_fixed_point(None)?;
        Ok(self.cmp(&other))
    }

    /// Trailing zeros stripped, zero mapped to precision 0.
    fn normalized(&self) -> (BigInt, u32) {
        let ten = BigInt::from(10u32);
        let mut value = self.value.clone();
        let mut precision = self.precision;
        if value.is_zero() {
            return (value, 0);
        }
        while precision > 0 && (&value % &ten).is_zero() {
            value /= &ten;
            precision -= 1;
        }
        (value, precision)
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// `true` iff the value is non-zero.
    #[inline]
    pub fn to_bool(&self) -> bool {
        !self.value.is_zero()
    }

    /// Nearest integer, rounding half away from zero.
    pub fn to_bigint(&self) -> BigInt {
        round_to_precision(&self.value, self.precision, 0)
    }

    /// Nearest `i64`, rounding half away from zero.
    ///
    /// # Errors
    /// `Overflow` if the rounded value does not fit.
    pub fn to_i64(&self) -> NumericResult<i64> {
        self.to_bigint().to_i64().ok_or(NumericError::Overflow)
    }

    /// Lossy conversion to `f64` as `value / 10^precision`.
    ///
    /// Very large values or precisions saturate to infinity or zero.
    pub fn to_f64(&self) -> f64 {
        let numerator = self.value.to_f64().unwrap_or(f64::NAN);
        let denominator = pow10(self.precision).to_f64().unwrap_or(f64::INFINITY);
        numerator / denominator
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FixedPoint {
    #[inline]
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PartialEq for FixedPoint {
    fn eq(&self, other: &Self) -> bool {
        if self.precision == other.precision {
            return self.value == other.value;
        }
        let (_, lhs, rhs) = self.calibrated_values(other);
        lhs == rhs
    }
}

impl Eq for FixedPoint {}

impl PartialOrd for FixedPoint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.precision == other.precision {
            return self.value.cmp(&other.value);
        }
        let (_, lhs, rhs) = self.calibrated_values(other);
        lhs.cmp(&rhs)
    }
}

// Weakly equal numbers hash alike.
impl Hash for FixedPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl From<BigInt> for FixedPoint {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for FixedPoint {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl TryFrom<f64> for FixedPoint {
    type Error = NumericError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value, None)
    }
}

impl TryFrom<&str> for FixedPoint {
    type Error = NumericError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_with_precision(value, None)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedPoint({}, value={}, precision={})",
            self, self.value, self.precision
        )
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value.sign() == Sign::Minus { "-" } else { "" };
        let digits = self.value.magnitude().to_string();

        if self.precision == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let precision = self.precision as usize;
        let padded = format!("{:0>width$}", digits, width = precision + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - precision);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for FixedPoint {
    type Err = NumericError;

    /// Parse with the precision implied by the input.
    ///
    /// # Examples
    /// - "0.00123" -> value 123, precision 5
    /// - "1234e-2" -> value 1234, precision 2
    /// - "-12" -> value -12, precision 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_precision(s, None)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl FixedPoint {
    /// Largest scale a `rust_decimal::Decimal` supports.
    pub const MAX_DECIMAL_SCALE: u32 = 28;

    /// Convert from `rust_decimal::Decimal`. Exact: the decimal's mantissa
    /// and scale become value and precision.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::new(d.mantissa(), d.scale())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the precision exceeds 28
    /// - `Overflow` if the value needs more than 96 bits
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        if self.precision > Self::MAX_DECIMAL_SCALE {
            return Err(NumericError::PrecisionLoss);
        }
        let mantissa = self.value.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.precision)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fxp(input: impl Into<Operand>) -> FixedPoint {
        FixedPoint::fxp(input, None).unwrap()
    }

    fn fxp_at(input: impl Into<Operand>, precision: u32) -> FixedPoint {
        FixedPoint::fxp(input, Some(precision)).unwrap()
    }

    fn fp(value: i128, precision: u32) -> FixedPoint {
        FixedPoint::new(value, precision)
    }

    fn assert_strong(actual: &FixedPoint, expected: &FixedPoint) {
        assert!(
            actual.strong_eq(expected),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_from_string() {
        let cases: &[(&str, Option<u32>, FixedPoint)] = &[
            ("0", None, fp(0, 0)),
            ("1", None, fp(1, 0)),
            ("-2", None, fp(-2, 0)),
            ("0.00123", None, fp(123, 5)),
            (".0012", Some(4), fp(12, 4)),
            ("0.00123", Some(5), fp(123, 5)),
            ("1.00000000000011111111", None, fp(100000000000011111111, 20)),
            ("-123456.78901234556", None, fp(-12345678901234556, 11)),
            ("0.0001", None, fp(1, 4)),
            ("12300.0045", None, fp(123000045, 4)),
            ("12300.0045", Some(3), fp(12300005, 3)),
            ("12300.0045", Some(2), fp(1230000, 2)),
            ("-12300.0045", Some(3), fp(-12300005, 3)),
            ("-12300.0045", Some(2), fp(-1230000, 2)),
            ("7", Some(2), fp(700, 2)),
        ];
        for (input, precision, expected) in cases {
            let actual = FixedPoint::fxp(*input, *precision).unwrap();
            assert_strong(&actual, expected);
        }
    }

    #[test]
    fn test_from_scientific_string() {
        let cases: &[(&str, Option<u32>, FixedPoint)] = &[
            ("1234e-2", None, fp(1234, 2)),
            ("1234e-2", Some(4), fp(123400, 4)),
            ("1234e-2", Some(1), fp(123, 1)),
            ("1234e2", None, fp(123400, 0)),
            ("1234e2", Some(4), fp(1234000000, 4)),
            ("-1234e-2", Some(1), fp(-123, 1)),
            ("-1234e2", None, fp(-123400, 0)),
            ("1.234e-2", None, fp(1234, 5)),
            ("1.234e-2", Some(7), fp(123400, 7)),
            ("1.234e-2", Some(3), fp(12, 3)),
            ("-1.234e-2", Some(3), fp(-12, 3)),
            ("1.5E+3", None, fp(15000, 1)),
        ];
        for (input, precision, expected) in cases {
            let actual = FixedPoint::fxp(*input, *precision).unwrap();
            assert_strong(&actual, expected);
        }
    }

    #[test]
    fn test_from_string_invalid() {
        for input in [
            "1.1.1", " 1.1", "1.1 ", "1,2", "", "-", ".", "abc", "1e", "1e2e3", "1e1.5", "--1",
            "+1", "1_000",
        ] {
            assert_eq!(
                FixedPoint::fxp(input, None),
                Err(NumericError::InvalidFormat),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_from_integer() {
        assert_strong(&fxp(1), &fp(1, 0));
        assert_strong(&fxp_at(1, 2), &fp(100, 2));
        assert_strong(&fxp(-12345), &fp(-12345, 0));
        assert_strong(&fxp_at(-12345i16, 3), &fp(-12345000, 3));
        assert_strong(&fxp_at(BigInt::from(7u8), 1), &fp(70, 1));
    }

    #[test]
    fn test_from_float() {
        assert_strong(&fxp(0.00123), &fp(123, 5));
        assert_strong(&fxp(0.0001), &fp(1, 4));
        assert_strong(&fxp(12300.0045), &fp(123000045, 4));
        assert_strong(&fxp_at(12300.0045, 3), &fp(12300005, 3));
        assert_strong(&fxp_at(-12300.0045, 3), &fp(-12300005, 3));
        assert_strong(&fxp(1234e-2), &fp(1234, 2));
        assert_strong(&fxp_at(1234e-2, 1), &fp(123, 1));
        assert_strong(&fxp(1234e2), &fp(1234000, 1));
        assert_eq!(fxp(1234e2), fp(123400, 0));
        assert_strong(&fxp_at(-1.234e-2, 3), &fp(-12, 3));
        assert_strong(&fxp(1e-7), &fp(1, 7));
        assert_strong(&fxp(1e21), &fp(1_000_000_000_000_000_000_000, 0));
    }

    #[test]
    fn test_whole_float_keeps_one_decimal() {
        assert_strong(&fxp(42.0), &fp(420, 1));
        assert_strong(&fxp(-3.0), &fp(-30, 1));
        assert_strong(&fxp(0.0), &fp(0, 1));
        assert_strong(&fxp_at(42.0, 3), &fp(42000, 3));
        assert_strong(&fxp(1e15), &fp(10_000_000_000_000_000, 1));
        assert_strong(&fxp(1e16), &fp(10_000_000_000_000_000, 0));
        assert_strong(&fxp(0.00001), &fp(1, 5));
    }

    #[test]
    fn test_float_matches_string() {
        for (float, text) in [(0.1, "0.1"), (0.3, "0.3"), (-2.675, "-2.675"), (1e21, "1e21")] {
            assert_strong(&fxp(float), &fxp(text));
        }
    }

    #[test]
    fn test_from_non_finite_float() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                FixedPoint::from_f64(value, None),
                Err(NumericError::InvalidFormat)
            );
        }
    }

    #[test]
    fn test_from_fixed_point() {
        assert_strong(&fxp(fxp(0.0001)), &fp(1, 4));
        assert_strong(&fxp_at(fxp(0.0001), 5), &fp(10, 5));
        assert_strong(&fxp_at(fxp(0.0001), 3), &fp(0, 3));
        assert_strong(&fxp_at(fxp(0.0005), 3), &fp(1, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(fp(123, 5).to_string(), "0.00123");
        assert_eq!(fp(10001, 4).to_string(), "1.0001");
        assert_eq!(fp(123, 2).to_string(), "1.23");
        assert_eq!(fp(-5, 3).to_string(), "-0.005");
        assert_eq!(fp(0, 2).to_string(), "0.00");
        assert_eq!(fp(-42, 0).to_string(), "-42");

        let big = FixedPoint::new(pow10(100), 0);
        assert_eq!(big.to_string(), format!("1{}", "0".repeat(100)));
        let big = FixedPoint::new(pow10(100), 5);
        assert_eq!(big.to_string(), format!("1{}.00000", "0".repeat(95)));
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", fp(-123, 2)),
            "FixedPoint(-1.23, value=-123, precision=2)"
        );
    }

    #[test]
    fn test_calibrate() {
        let (precision, calibrated) =
            FixedPoint::calibrate(&[fxp("-1.1"), fxp("2.22"), fxp("3.333")]);
        assert_eq!(precision, 3);
        assert_strong(&calibrated[0], &fp(-1100, 3));
        assert_strong(&calibrated[1], &fp(2220, 3));
        assert_strong(&calibrated[2], &fp(3333, 3));

        let (precision, calibrated) = FixedPoint::calibrate(&[fxp("1.1"), fxp("2.2")]);
        assert_eq!(precision, 1);
        assert_strong(&calibrated[0], &fp(11, 1));
    }

    #[test]
    #[should_panic(expected = "calibration requires at least one fixed-point")]
    fn test_calibrate_empty_panics() {
        FixedPoint::calibrate(&[]);
    }

    #[test]
    fn test_addition() {
        let cases: Vec<(Operand, Operand, &str)> = vec![
            ("1.001".into(), "2345.000000345".into(), "2346.001000345"),
            (0.1.into(), 0.3.into(), "0.4"),
            (42.into(), 123456789.into(), "123456831"),
            (fxp_at(51, 3).into(), fxp_at(300, 5).into(), "351.00000"),
            ("-5.001".into(), "5.001".into(), "0.000"),
            ("-2222".into(), "-1111.111".into(), "-3333.111"),
            ("-10.2".into(), "5.4".into(), "-4.8"),
            ("987654321".into(), "-1.111".into(), "987654319.889"),
        ];
        for (a, b, expected) in cases {
            let a = a.into_fixed_point(None).unwrap();
            let sum = a.checked_add(b).unwrap();
            assert_strong(&sum, &fxp(expected));
        }
    }

    #[test]
    fn test_subtraction() {
        let cases: Vec<(Operand, Operand, &str)> = vec![
            ("1.001".into(), "-2345.000000345".into(), "2346.001000345"),
            (0.1.into(), 0.3.into(), "-0.2"),
            (42.into(), 123456789.into(), "-123456747"),
            (fxp_at(51, 3).into(), fxp_at(300, 5).into(), "-249.00000"),
            ("-5.001".into(), "-5.001".into(), "0.000"),
            ("-2222".into(), "1111.111".into(), "-3333.111"),
            ("-10.2".into(), "-5.4".into(), "-4.8"),
            ("987654321".into(), "1.111".into(), "987654319.889"),
        ];
        for (a, b, expected) in cases {
            let a = a.into_fixed_point(None).unwrap();
            let difference = a.checked_sub(b).unwrap();
            assert_strong(&difference, &fxp(expected));
        }
    }

    #[test]
    fn test_multiplication() {
        let tiny = format!("0.{}200", "0".repeat(97));
        let product = format!("400.{}", "0".repeat(100));
        let cases: Vec<(Operand, Operand, String)> = vec![
            ("1.0101".into(), "1.0010000".into(), "1.0111101".into()),
            (0.1.into(), 0.3.into(), "0.0".into()),
            (42.into(), 123456789.into(), "5185185138".into()),
            (fxp_at(51, 3).into(), fxp_at(300, 5).into(), "15300.00000".into()),
            ("1.0101".into(), "1.001".into(), "1.0111".into()),
            ((BigInt::from(2) * pow10(100)).into(), tiny.into(), product),
            ("3".into(), "4".into(), "12".into()),
            (0.1999.into(), 0.1.into(), "0.0200".into()),
            ("0.1".into(), "0.5".into(), "0.1".into()),
            ("-0.1".into(), "0.5".into(), "-0.1".into()),
        ];
        for (a, b, expected) in cases {
            let a = a.into_fixed_point(None).unwrap();
            let product = a.checked_mul(b).unwrap();
            assert_strong(&product, &fxp(expected.as_str()));
        }
    }

    #[test]
    fn test_division() {
        let cases: Vec<(Operand, Operand, &str)> = vec![
            ("1.0101".into(), "1.0010000".into(), "1.0090909"),
            (0.1.into(), 0.3.into(), "0.3"),
            (0.3.into(), 0.1.into(), "3.0"),
            (123456789.into(), 42.into(), "2939447"),
            (123456789.into(), 42.0.into(), "2939447.4"),
            ("123456789.00".into(), 42.0.into(), "2939447.36"),
            ("123456789.00".into(), "42.000".into(), "2939447.357"),
            (fxp_at(300, 5).into(), fxp_at(51, 3).into(), "5.88235"),
            ("1.0101".into(), "1.001".into(), "1.0091"),
            ("2".into(), "3".into(), "1"),
            ("2".into(), "3.0".into(), "0.7"),
            ("2.0".into(), "3.0".into(), "0.7"),
            ("2.0".into(), "3".into(), "0.7"),
            ("0.2".into(), "3.0".into(), "0.1"),
            ("0.1".into(), "2.1".into(), "0.0"),
            ("-2".into(), "3".into(), "-1"),
            ("2".into(), "-3.0".into(), "-0.7"),
            ("46".into(), "100".into(), "1"),
            ("-46".into(), "100".into(), "-1"),
            ("145".into(), "100".into(), "2"),
            ("59.845".into(), "4".into(), "14.961"),
        ];
        for (a, b, expected) in cases {
            let a = a.into_fixed_point(None).unwrap();
            let quotient = a.checked_div(b).unwrap();
            assert_strong(&quotient, &fxp(expected));
        }
    }

    #[test]
    fn test_division_by_zero() {
        let one = fxp(1);
        for zero in [fp(0, 0), fp(0, 5)] {
            assert_eq!(one.checked_div(zero), Err(NumericError::DivisionByZero));
        }
        assert_eq!(one.checked_div("0.000"), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_invalid_operand_text() {
        let one = fxp(1);
        assert_eq!(one.checked_add("1.1.1"), Err(NumericError::InvalidFormat));
        assert_eq!(one.checked_mul("x"), Err(NumericError::InvalidFormat));
        assert_eq!(one.checked_cmp(f64::NAN), Err(NumericError::InvalidFormat));
    }

    #[test]
    fn test_comparisons() {
        let gt = |a: &str, b: &str| fxp(a).checked_cmp(b).unwrap() == Ordering::Greater;
        let lt = |a: &str, b: &str| fxp(a).checked_cmp(b).unwrap() == Ordering::Less;
        assert!(!gt("1", "2"));
        assert!(gt("-1", "-2"));
        assert!(!lt("0.001", "0.00005"));
        assert!(lt("-0.001", "0.00005"));
        assert!(fxp("1.02") >= fxp("1.02"));
        assert!(!(fxp("-1.02") >= fxp("1.02")));
        assert!(fxp("1.02") >= fxp("-1.02"));
        assert!(!(fxp("-5.1") <= fxp("-6.1")));
        assert!(fxp("5.1") <= fxp("6.1"));
    }

    #[test]
    fn test_weak_equality() {
        assert_ne!(fxp("1.001"), fxp("1.01"));
        assert_eq!(fxp("123456.789"), fxp("123456.789"));
        assert_eq!(fxp("123456.7890"), fxp("123456.789"));
        assert_ne!(fxp("-123456.789"), fxp("123456.789"));
        assert_eq!(fxp("100.0"), fxp("100.0000"));
    }

    #[test]
    fn test_checked_eq_coerces_to_own_precision() {
        assert!(fxp("12.34").checked_eq(12.34).unwrap());
        assert!(fxp("1.23").checked_eq(1.234).unwrap());
        assert!(!fxp("0.012").checked_eq(fxp("0.01")).unwrap());
        assert!(fxp("5.00").checked_eq(5).unwrap());
        assert!(fxp("5.00").checked_eq("5.0").unwrap());
    }

    #[test]
    fn test_strong_equality() {
        assert!(fxp("1.0").strong_eq(&fxp("1.0")));
        assert!(!fxp("1.0").strong_eq(&fxp("1.00")));
        assert!(!fxp("1.0").strong_eq(&fxp("1.1")));
    }

    #[test]
    fn test_hash_consistent_with_weak_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(fxp("1.5"));
        assert!(set.contains(&fxp("1.500")));
        assert!(!set.contains(&fxp("1.05")));

        set.insert(fp(0, 4));
        assert!(set.contains(&fp(0, 0)));
    }

    #[test]
    fn test_negation_and_abs() {
        let x = fxp("-12.5");
        assert_strong(&x.abs(), &fp(125, 1));
        assert_strong(&fxp("12.5").abs(), &fp(125, 1));
        assert!(x.is_negative());
        assert!(x.abs().is_positive());
        assert_strong(&x.signum(), &fp(-1, 0));
        assert!(fp(0, 3).is_zero());
    }

    #[test]
    fn test_to_bool() {
        assert!(!fp(0, 0).to_bool());
        assert!(!fp(0, 3).to_bool());
        assert!(fp(123, 1).to_bool());
        assert!(fp(-345, 5).to_bool());
    }

    #[test]
    fn test_to_integer_rounds() {
        assert_eq!(fp(100, 0).to_bigint(), BigInt::from(100));
        assert_eq!(fp(100, 3).to_bigint(), BigInt::from(0));
        assert_eq!(fp(150, 2).to_bigint(), BigInt::from(2));
        assert_eq!(fp(149, 2).to_bigint(), BigInt::from(1));
        assert_eq!(fp(-150, 2).to_i64(), Ok(-2));
        assert_eq!(
            FixedPoint::new(pow10(30), 0).to_i64(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(fp(1234, 3).to_f64(), 1.234);
        assert_eq!(fp(1, 0).to_f64(), 1.0);
        assert_eq!(fp(1500000, 6).to_f64(), 1.5);
        assert_eq!(fp(-25, 1).to_f64(), -2.5);
    }

    #[test]
    fn test_from_str_trait() {
        let x: FixedPoint = "123.456".parse().unwrap();
        assert_strong(&x, &fp(123456, 3));
        let bad: Result<FixedPoint, _> = "not_a_number".parse();
        assert_eq!(bad, Err(NumericError::InvalidFormat));
    }

    #[test]
    fn test_decimal_interop() {
        use rust_decimal::Decimal;

        let d = Decimal::new(-12345, 2);
        let x = FixedPoint::from_decimal(d);
        assert_strong(&x, &fp(-12345, 2));
        assert_eq!(x.to_decimal().unwrap(), d);
        assert_eq!(x.to_decimal().unwrap().to_string(), "-123.45");

        assert_eq!(fp(1, 29).to_decimal(), Err(NumericError::PrecisionLoss));
        assert_eq!(
            FixedPoint::new(pow10(40), 0).to_decimal(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_default_is_zero() {
        assert_strong(&FixedPoint::default(), &fp(0, 0));
    }
}

// ============================================================================
// Property Tests
// ============================================================================
