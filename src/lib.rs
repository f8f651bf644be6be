// ============================================================================
// MPC Fixed-Point Library
// Exact decimal fixed-point arithmetic for encryption-scheme plaintexts
// ============================================================================

//! # MPC Fixed-Point
//!
//! Arbitrary-precision decimal fixed-point numbers, meant to carry plaintext
//! values exactly before they are encoded into integers for encryption.
//!
//! ## Features
//!
//! - **Exact representation**: a value is a big integer plus a decimal precision
//! - **Calibrated arithmetic**: mixed-precision operands meet at the larger precision
//! - **Round half away from zero** for multiplication, division and narrowing
//! - **Cryptographic randomness** for masks drawn from a decimal range
//! - **Number-theory helpers** (modular inverse and power, primes) for the schemes built on top
//!
//! ## Example
//!
//! ```rust
//! use mpc_fixed_point::prelude::*;
//!
//! let a = FixedPoint::fxp("0.1", None).unwrap();
//! let b = FixedPoint::fxp(0.3, None).unwrap();
//! assert!((&a + &b).strong_eq(&FixedPoint::fxp("0.4", None).unwrap()));
//!
//! // Products are rounded back to the larger operand precision
//! let c = FixedPoint::fxp("1.25", None).unwrap() * FixedPoint::fxp("0.5", None).unwrap();
//! assert_eq!(c.to_string(), "0.63");
//!
//! // Weak equality ignores precision, strong equality does not
//! let d = FixedPoint::fxp(5, Some(3)).unwrap();
//! assert_eq!(d, 5i64);
//! assert!(!d.strong_eq(&FixedPoint::from(5i64)));
//!
//! let mask = FixedPoint::random_range(&FixedPoint::new(0, 1), &FixedPoint::new(100, 1), false);
//! assert!(mask >= 0i32 && mask < 10i32);
//! ```

pub mod number_theory;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::number_theory::{
        extended_gcd, is_prime, least_common_multiple, modular_inverse, modular_pow, next_prime,
        random_prime, PrimalityConfig,
    };
    pub use crate::numeric::{BigInt, FixedPoint, NumericError, NumericResult, Operand};
}
