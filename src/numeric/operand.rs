// ============================================================================
// Operand
// Tagged union of every input a fixed-point can be built from
// ============================================================================

use super::backend::BigInt;
#[cfg(feature = "serde")]
use super::errors::NumericError;
use super::errors::NumericResult;
use super::fixed_point::FixedPoint;

/// A value convertible to a [`FixedPoint`].
///
/// Constructors and arithmetic methods accept `impl Into<Operand>`, so
/// integers, floats, decimal strings and fixed-points can be mixed freely:
///
/// ```
/// use mpc_fixed_point::numeric::FixedPoint;
///
/// let x = FixedPoint::fxp("1.25", None).unwrap();
/// let y = x.checked_add(3).unwrap().checked_mul(0.5).unwrap();
/// assert_eq!(y.to_string(), "2.13");
/// ```
#[derive(Debug, Clone)]
pub enum Operand {
    /// An existing fixed-point number
    Fixed(FixedPoint),
    /// An arbitrary-precision integer
    Integer(BigInt),
    /// A native float, converted through its shortest round-trip decimal text
    Float(f64),
    /// A decimal or scientific literal
    Text(String),
}

impl Operand {
    /// Convert to a fixed-point, optionally at `target_precision`.
    ///
    /// # Errors
    /// `InvalidFormat` for malformed text and non-finite floats.
    pub fn into_fixed_point(self, target_precision: Option<u32>) -> NumericResult<FixedPoint> {
        match self {
            Operand::Fixed(fixed) => Ok(fixed.with_target(target_precision)),
            Operand::Integer(value) => Ok(FixedPoint::from_integer(value, target_precision)),
            Operand::Float(value) => FixedPoint::from_f64(value, target_precision),
            Operand::Text(text) => FixedPoint::parse_with_precision(&text, target_precision),
        }
    }

    /// Short name of the carried kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Fixed(_) => "fixed-point",
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Text(_) => "string",
        }
    }

    // ========================================================================
    // Reflected Arithmetic
    // The operand sits on the left: convert it, then dispatch to FixedPoint.
    // ========================================================================

    /// `self + rhs`
    pub fn checked_add(self, rhs: &FixedPoint) -> NumericResult<FixedPoint> {
        self.into_fixed_point(None)?.checked_add(rhs)
    }

    /// `self - rhs`
    pub fn checked_sub(self, rhs: &FixedPoint) -> NumericResult<FixedPoint> {
        self.into_fixed_point(None)?.checked_sub(rhs)
    }

    /// `self * rhs`
    pub fn checked_mul(self, rhs: &FixedPoint) -> NumericResult<FixedPoint> {
        self.into_fixed_point(None)?.checked_mul(rhs)
    }

    /// `self / rhs`
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero at any precision.
    pub fn checked_div(self, rhs: &FixedPoint) -> NumericResult<FixedPoint> {
        self.into_fixed_point(None)?.checked_div(rhs)
    }
}

// ============================================================================
// Conversions Into Operand
// ============================================================================

impl From<FixedPoint> for Operand {
    #[inline]
    fn from(value: FixedPoint) -> Self {
        Operand::Fixed(value)
    }
}

impl From<&FixedPoint> for Operand {
    #[inline]
    fn from(value: &FixedPoint) -> Self {
        Operand::Fixed(value.clone())
    }
}

impl From<BigInt> for Operand {
    #[inline]
    fn from(value: BigInt) -> Self {
        Operand::Integer(value)
    }
}

impl From<&BigInt> for Operand {
    #[inline]
    fn from(value: &BigInt) -> Self {
        Operand::Integer(value.clone())
    }
}

macro_rules! impl_operand_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(value: $t) -> Self {
                    Operand::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_operand_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    /// Goes through the shortest `f32` text so `0.1f32` means 0.1, not the
    /// nearest `f64` to the binary `f32`.
    fn from(value: f32) -> Self {
        Operand::Float(value.to_string().parse().unwrap_or(f64::NAN))
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(value: &str) -> Self {
        Operand::Text(value.to_owned())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    #[inline]
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}

// ============================================================================
// Dynamic Values (for API integration)
// ============================================================================

#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for Operand {
    type Error = NumericError;

    /// Numbers map to `Integer` or `Float`, strings to `Text`.
    ///
    /// # Errors
    /// `UnsupportedOperand` for null, booleans, arrays and objects.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(Operand::Integer(BigInt::from(int)))
                } else if let Some(uint) = number.as_u64() {
                    Ok(Operand::Integer(BigInt::from(uint)))
                } else {
                    number
                        .as_f64()
                        .map(Operand::Float)
                        .ok_or(NumericError::UnsupportedOperand)
                }
            },
            Value::String(text) => Ok(Operand::Text(text.clone())),
            other => {
                tracing::debug!(?other, "rejected operand of unsupported JSON type");
                Err(NumericError::UnsupportedOperand)
            },
        }
    }
}
