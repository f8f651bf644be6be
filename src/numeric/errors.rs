// ============================================================================
// Numeric Errors
// Error types for fixed-point and number-theoretic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic and the integer helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a decimal or scientific literal
    InvalidFormat,
    /// Construction from a value that is not a string, integer, float or fixed-point
    UnsupportedType,
    /// Operator invoked with an operand that cannot be converted to a fixed-point
    UnsupportedOperand,
    /// Division by a zero-valued operand, or inversion of a non-invertible element
    DivisionByZero,
    /// Result does not fit the bounded target type
    Overflow,
    /// Bounded target type cannot carry the requested precision
    PrecisionLoss,
    /// The requested range contains no prime
    NoPrimeInRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => write!(
                f,
                "invalid format: expected \"x\", \"x.y\" or \"x.yeP\" for integers x, y and P"
            ),
            NumericError::UnsupportedType => write!(
                f,
                "unsupported type: expected a string, integer, float or fixed-point"
            ),
            NumericError::UnsupportedOperand => write!(
                f,
                "unsupported operand: compatible operands are string, integer, float and fixed-point"
            ),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value does not fit the target type")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: target type cannot represent the requested precision"
            ),
            NumericError::NoPrimeInRange => write!(f, "no prime exists in the requested range"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
