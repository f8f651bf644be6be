// ============================================================================
// Numeric Module
// Arbitrary-precision decimal fixed-point arithmetic
// ============================================================================
//
// This module provides:
// - FixedPoint: exact decimal number as (big integer, precision)
// - Operand: tagged union of inputs convertible to a FixedPoint
// - NumericError: Error types for arithmetic and conversions
// - round_to_precision: round-half-away-from-zero precision changes
//
// Design principles:
// - No floating-point operations on the value itself
// - Immutable values, every operation returns a new number
// - Checked methods return Result; std operators panic where those would fail
// - Runtime precision, calibrated to the maximum before binary operations

pub mod backend;
mod errors;
mod fixed_point;
mod operand;
mod ops;
mod random;
mod rounding;
#[cfg(feature = "serde")]
mod serde_impl;

pub use backend::BigInt;
pub use errors::{NumericError, NumericResult};
pub use fixed_point::FixedPoint;
pub use operand::Operand;
pub use rounding::round_to_precision;
