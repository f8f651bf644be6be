// ============================================================================
// Serde Integration
// JSON entry points and serializer round trips (feature = "serde")
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::FixedPoint;
use super::operand::Operand;

impl FixedPoint {
    /// Build a fixed-point from a dynamically typed JSON value.
    ///
    /// Numbers and decimal strings convert like [`FixedPoint::fxp`].
    ///
    /// # Errors
    /// - `UnsupportedType` for null, booleans, arrays and objects
    /// - `InvalidFormat` for malformed strings
    pub fn from_json(
        value: &serde_json::Value,
        target_precision: Option<u32>,
    ) -> NumericResult<Self> {
        let operand = Operand::try_from(value).map_err(|err| match err {
            NumericError::UnsupportedOperand => NumericError::UnsupportedType,
            other => other,
        })?;
        operand.into_fixed_point(target_precision)
    }
}
