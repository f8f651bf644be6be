// ============================================================================
// Random Fixed-Points
// Uniform sampling from a cryptographically secure source
// ============================================================================

use super::backend::random_below;
use super::fixed_point::FixedPoint;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

impl FixedPoint {
    /// Uniformly random fixed-point in `[lower_bound, upper_bound)`, drawn
    /// from the operating system's CSPRNG.
    ///
    /// With `signed` the sign is randomized as well, so the result lies in
    /// `[lower_bound, upper_bound) ∪ (-upper_bound, -lower_bound]`.
    /// The result has the larger of the two bound precisions.
    ///
    /// # Panics
    /// Panics unless `lower_bound < upper_bound`.
    pub fn random_range(lower_bound: &FixedPoint, upper_bound: &FixedPoint, signed: bool) -> Self {
        Self::random_range_with(&mut OsRng, lower_bound, upper_bound, signed)
    }

    /// [`FixedPoint::random_range`] with a caller-supplied cryptographic RNG.
    ///
    /// # Panics
    /// Panics unless `lower_bound < upper_bound`.
    pub fn random_range_with<R: RngCore + CryptoRng>(
        rng: &mut R,
        lower_bound: &FixedPoint,
        upper_bound: &FixedPoint,
        signed: bool,
    ) -> Self {
        assert!(
            lower_bound < upper_bound,
            "the upper bound needs to be larger than the lower bound"
        );

        let precision = lower_bound.precision().max(upper_bound.precision());
        let lower = lower_bound.with_precision(precision);
        let upper = upper_bound.with_precision(precision);

        let span = upper.value() - lower.value();
        let mut value = random_below(rng, &span) + lower.value();
        if signed && rng.gen::<bool>() {
            value = -value;
        }

        tracing::debug!(precision, signed, "drew random fixed-point");
        FixedPoint::new(value, precision)
    }
}
