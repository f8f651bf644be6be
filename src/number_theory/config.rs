// ============================================================================
// Primality Configuration
// Tuning knobs for primality testing and prime generation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`is_prime_with`](super::is_prime_with) and the prime
/// generators built on it.
///
/// Candidates are first trial-divided by every prime below
/// `trial_division_bound`, then run through Miller-Rabin with the first twelve
/// primes as fixed bases (deterministic below 3.1 × 10^23) plus
/// `random_rounds` bases drawn from the OS CSPRNG.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimalityConfig {
    /// Extra Miller-Rabin rounds with random bases for large candidates
    pub random_rounds: usize,

    /// Exclusive upper bound for the trial-division sieve (at least 3)
    pub trial_division_bound: u32,
}

impl PrimalityConfig {
    /// Create a configuration with explicit values.
    pub fn new(random_rounds: usize, trial_division_bound: u32) -> Self {
        Self {
            random_rounds,
            trial_division_bound: trial_division_bound.max(3),
        }
    }

    /// Builder method: Set the number of random-base rounds
    pub fn with_random_rounds(mut self, rounds: usize) -> Self {
        self.random_rounds = rounds;
        self
    }

    /// Builder method: Set the trial-division bound
    pub fn with_trial_division_bound(mut self, bound: u32) -> Self {
        self.trial_division_bound = bound.max(3);
        self
    }
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self::new(16, 1000)
    }
}
