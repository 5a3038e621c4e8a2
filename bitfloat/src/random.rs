use rand::distributions::{Distribution, Standard};
use rand::Rng;

use bitint::UInteger;

use crate::Float;

impl<const E: usize, const M: usize> Distribution<Float<E, M>> for Standard {
    /// Samples every bit pattern with equal probability, so infinities and
    /// NaNs are included.
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Float<E, M> {
        Float::from_parts(rng.gen(), rng.gen(), rng.gen())
    }
}

/// Samples finite values: every exponent field except the all-ones one,
/// with uniformly random sign and mantissa.
#[derive(Clone, Copy, Debug, Default)]
pub struct FiniteFloats;

impl<const E: usize, const M: usize> Distribution<Float<E, M>> for FiniteFloats {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Float<E, M> {
        let exponent = rng.gen_range(0..(1u64 << E) - 1);
        Float::from_parts(rng.gen(), UInteger::from(exponent), rng.gen())
    }
}
