// ============================================================================
// Operator Overloads
// std::ops and comparison traits over fixed-points and native numbers
// ============================================================================
//
// These are the ergonomic forms. They panic where the checked methods return
// an error (division by zero, non-finite float operand); use the `checked_*`
// methods when inputs are not trusted.

use super::backend::BigInt;
use super::fixed_point::FixedPoint;
use super::operand::Operand;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Shl, Shr, Sub};

impl Neg for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn neg(self) -> Self::Output {
        let (value, precision) = self.into_parts();
        FixedPoint::new(-value, precision)
    }
}

impl Neg for &FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn neg(self) -> Self::Output {
        FixedPoint::new(-self.value(), self.precision())
    }
}

// ============================================================================
// FixedPoint op FixedPoint
// ============================================================================

macro_rules! impl_fixed_binop {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $trait<&FixedPoint> for &FixedPoint {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: &FixedPoint) -> FixedPoint {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl $trait<FixedPoint> for &FixedPoint {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: FixedPoint) -> FixedPoint {
                $trait::$method(self, &rhs)
            }
        }

        impl $trait<&FixedPoint> for FixedPoint {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: &FixedPoint) -> FixedPoint {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<FixedPoint> for FixedPoint {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: FixedPoint) -> FixedPoint {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_fixed_binop!(Add, add, |lhs, rhs| lhs.add_fixed(rhs));
impl_fixed_binop!(Sub, sub, |lhs, rhs| lhs.sub_fixed(rhs));
impl_fixed_binop!(Mul, mul, |lhs, rhs| lhs.mul_fixed(rhs));
impl_fixed_binop!(Div, div, |lhs, rhs| lhs
    .div_fixed(rhs)
    .expect("FixedPoint division by zero"));

// ============================================================================
// FixedPoint op native, and the reflected native op FixedPoint
// ============================================================================

fn operand_to_fixed(operand: impl Into<Operand>) -> FixedPoint {
    operand
        .into()
        .into_fixed_point(None)
        .expect("operand is not a finite number")
}

macro_rules! impl_native_binops {
    ($($t:ty),* $(,)?) => {
        $(
            impl_native_binops!(@op $t, Add, add);
            impl_native_binops!(@op $t, Sub, sub);
            impl_native_binops!(@op $t, Mul, mul);
            impl_native_binops!(@op $t, Div, div);

            impl PartialEq<$t> for FixedPoint {
                /// Weak equality, `other` taken at `self`'s precision.
                fn eq(&self, other: &$t) -> bool {
                    self.checked_eq(other.clone()).unwrap_or(false)
                }
            }

            impl PartialEq<FixedPoint> for $t {
                #[inline]
                fn eq(&self, other: &FixedPoint) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$t> for FixedPoint {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.checked_cmp(other.clone()).ok()
                }
            }

            impl PartialOrd<FixedPoint> for $t {
                fn partial_cmp(&self, other: &FixedPoint) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
    (@op $t:ty, $trait:ident, $method:ident) => {
        impl $trait<$t> for &FixedPoint {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: $t) -> FixedPoint {
                $trait::$method(self, &operand_to_fixed(rhs))
            }
        }

        impl $trait<$t> for FixedPoint {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: $t) -> FixedPoint {
                $trait::$method(&self, &operand_to_fixed(rhs))
            }
        }

        impl $trait<&FixedPoint> for $t {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: &FixedPoint) -> FixedPoint {
                $trait::$method(&operand_to_fixed(self), rhs)
            }
        }

        impl $trait<FixedPoint> for $t {
            type Output = FixedPoint;

            #[inline]
            fn $method(self, rhs: FixedPoint) -> FixedPoint {
                $trait::$method(&operand_to_fixed(self), &rhs)
            }
        }
    };
}

impl_native_binops!(i32, i64, u32, u64, BigInt, f64);

// ============================================================================
// Bit Shifts
// Shift the scaled value; the radix stays where it is.
// ============================================================================

impl Shl<u32> for &FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn shl(self, bits: u32) -> FixedPoint {
        FixedPoint::new(self.value() << bits, self.precision())
    }
}

impl Shl<u32> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn shl(self, bits: u32) -> FixedPoint {
        &self << bits
    }
}

impl Shr<u32> for &FixedPoint {
    type Output = FixedPoint;

    /// Rounds toward negative infinity, like an arithmetic shift.
    #[inline]
    fn shr(self, bits: u32) -> FixedPoint {
        FixedPoint::new(self.value() >> bits, self.precision())
    }
}

impl Shr<u32> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn shr(self, bits: u32) -> FixedPoint {
        &self >> bits
    }
}

// ============================================================================
// Iterator Sums
// ============================================================================

impl Sum for FixedPoint {
    fn sum<I: Iterator<Item = FixedPoint>>(iter: I) -> Self {
        iter.fold(FixedPoint::default(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a FixedPoint> for FixedPoint {
    fn sum<I: Iterator<Item = &'a FixedPoint>>(iter: I) -> Self {
        iter.fold(FixedPoint::default(), |acc, x| &acc + x)
    }
}
