// ============================================================================
// Number Theory Module
// Integer helpers used alongside fixed-point encodings
// ============================================================================
//
// Independent of FixedPoint: everything here works on plain big integers.

pub mod config;
pub mod modular;
pub mod primes;

pub use config::PrimalityConfig;
pub use modular::{extended_gcd, least_common_multiple, modular_inverse, modular_pow};
pub use primes::{
    is_prime, is_prime_with, next_prime, next_prime_with, prime_count_below, random_prime,
    random_prime_with,
};
