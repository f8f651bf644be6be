// ============================================================================
// Primes
// Primality testing and prime generation over big integers
// ============================================================================

use super::config::PrimalityConfig;
use crate::numeric::backend::random_in_range;
use crate::numeric::{BigInt, NumericError, NumericResult};
use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Fixed Miller-Rabin bases; together they are deterministic below 3.1 × 10^23.
const FIXED_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Primality tester with its trial-division sieve built once.
struct PrimalityTester<'a> {
    config: &'a PrimalityConfig,
    small_primes: Vec<u32>,
}

impl<'a> PrimalityTester<'a> {
    fn new(config: &'a PrimalityConfig) -> Self {
        Self {
            config,
            small_primes: sieve(config.trial_division_bound),
        }
    }

    fn is_prime<R: RngCore + CryptoRng>(&self, rng: &mut R, n: &BigInt) -> bool {
        if n < &BigInt::from(2u32) {
            return false;
        }

        for &p in &self.small_primes {
            let p = BigInt::from(p);
            if *n == p {
                return true;
            }
            if n.is_multiple_of(&p) {
                return false;
            }
        }

        // No factor below the bound, so anything below bound^2 is prime.
        let bound = BigInt::from(self.config.trial_division_bound);
        if *n < &bound * &bound {
            return true;
        }

        let n_minus_one = n - 1u32;
        let two_adicity = n_minus_one.trailing_zeros().unwrap_or(0);
        let odd_part = &n_minus_one >> two_adicity;

        let witness = |base: &BigInt| is_witness(n, &n_minus_one, &odd_part, two_adicity, base);

        if FIXED_BASES
            .iter()
            .map(|&b| BigInt::from(b))
            .any(|base| witness(&base))
        {
            return false;
        }

        let upper = n - 1u32;
        (0..self.config.random_rounds).all(|_| {
            let base = rng.gen_bigint_range(&BigInt::from(2u32), &upper);
            !witness(&base)
        })
    }

    /// Smallest prime strictly greater than `n`.
    fn next_prime(&self, n: &BigInt) -> BigInt {
        let two = BigInt::from(2u32);
        if *n < two {
            return two;
        }

        let mut candidate: BigInt = n + 1u32;
        if candidate.is_even() {
            candidate += 1u32;
        }
        while !self.is_prime(&mut OsRng, &candidate) {
            candidate += 2u32;
        }
        candidate
    }

    /// Largest prime strictly below `n`, or `None` when `n <= 2`.
    fn prev_prime(&self, n: &BigInt) -> Option<BigInt> {
        let two = BigInt::from(2u32);
        if *n <= two {
            return None;
        }

        let mut candidate: BigInt = n - 1u32;
        if candidate == two {
            return Some(two);
        }
        if candidate.is_even() {
            candidate -= 1u32;
        }
        while candidate > two {
            if self.is_prime(&mut OsRng, &candidate) {
                return Some(candidate);
            }
            candidate -= 2u32;
        }
        Some(two)
    }
}

/// `true` if `base` proves `n` composite.
fn is_witness(
    n: &BigInt,
    n_minus_one: &BigInt,
    odd_part: &BigInt,
    two_adicity: u64,
    base: &BigInt,
) -> bool {
    let base = base.mod_floor(n);
    if base.is_zero() {
        return false;
    }
    let mut x = base.modpow(odd_part, n);
    if x.is_one() || x == *n_minus_one {
        return false;
    }
    for _ in 1..two_adicity {
        x = (&x * &x) % n;
        if x == *n_minus_one {
            return false;
        }
    }
    true
}

/// Primes strictly below `bound`.
fn sieve(bound: u32) -> Vec<u32> {
    let bound = bound as usize;
    let mut composite = vec![false; bound];
    let mut primes = Vec::new();
    for i in 2..bound {
        if composite[i] {
            continue;
        }
        primes.push(i as u32);
        let mut multiple = i * i;
        while multiple < bound {
            composite[multiple] = true;
            multiple += i;
        }
    }
    primes
}

// ============================================================================
// Public API
// ============================================================================

/// Primality test with the default [`PrimalityConfig`].
pub fn is_prime(n: &BigInt) -> bool {
    is_prime_with(n, &PrimalityConfig::default())
}

/// Primality test: trial division, then Miller-Rabin.
///
/// Deterministic below 3.1 × 10^23; above that a composite passes with
/// probability at most 4^-random_rounds.
pub fn is_prime_with(n: &BigInt, config: &PrimalityConfig) -> bool {
    PrimalityTester::new(config).is_prime(&mut OsRng, n)
}

/// Smallest prime strictly greater than `n`.
pub fn next_prime(n: &BigInt) -> BigInt {
    next_prime_with(n, &PrimalityConfig::default())
}

/// [`next_prime`] with an explicit configuration.
pub fn next_prime_with(n: &BigInt, config: &PrimalityConfig) -> BigInt {
    PrimalityTester::new(config).next_prime(n)
}

/// Random prime in `[low, high)`, using the OS CSPRNG.
///
/// # Errors
/// `NoPrimeInRange` if the range holds no prime.
///
/// # Panics
/// Panics unless `low < high`.
pub fn random_prime(low: &BigInt, high: &BigInt) -> NumericResult<BigInt> {
    random_prime_with(&mut OsRng, low, high, &PrimalityConfig::default())
}

/// [`random_prime`] with a caller-supplied RNG and configuration.
///
/// Draws a point uniformly in the range and returns the first prime at or
/// above it, falling back to the last prime below it.
pub fn random_prime_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    low: &BigInt,
    high: &BigInt,
    config: &PrimalityConfig,
) -> NumericResult<BigInt> {
    assert!(
        low < high,
        "the lower bound should be smaller than the upper bound"
    );

    let tester = PrimalityTester::new(config);
    let start = random_in_range(rng, low, high);

    let at_or_above = if start <= BigInt::from(2u32) {
        BigInt::from(2u32)
    } else {
        tester.next_prime(&(&start - 1u32))
    };
    if at_or_above >= *low && at_or_above < *high {
        return Ok(at_or_above);
    }

    match tester.prev_prime(&start) {
        Some(prime) if prime >= *low => {
            tracing::debug!(%start, %prime, "no prime above draw, took the one below");
            Ok(prime)
        },
        _ => {
            tracing::debug!(%low, %high, "range holds no prime");
            Err(NumericError::NoPrimeInRange)
        },
    }
}

/// Number of primes below `n`, for `n` small enough to sieve.
pub fn prime_count_below(n: u32) -> usize {
    sieve(n).len()
}
