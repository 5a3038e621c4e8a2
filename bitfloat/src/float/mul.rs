use bitint::uinteger::karatsuba_mul;

use super::{Float, Rounding};

impl<const E: usize, const M: usize> Float<E, M> {
    fn mul_special(&self, other: &Self) -> Option<Self> {
        let sign = self.sign ^ other.sign;
        if self.is_nan() || other.is_nan() {
            return Some(Self::nan());
        }
        if self.is_inf() || other.is_inf() {
            if self.is_zero() || other.is_zero() {
                return Some(Self::nan());
            }
            return Some(Self::signed_infinity(sign));
        }
        if self.is_zero() || other.is_zero() {
            return Some(Self::signed_zero(sign));
        }
        None
    }

    /// Computes `self * other`, rounded to nearest, ties to even.
    ///
    /// The `2M + 2` bit product of the significands is formed exactly before
    /// rounding. Infinity times zero is NaN.
    pub fn mul(&self, other: &Self) -> Self {
        if let Some(special) = self.mul_special(other) {
            return special;
        }

        let a = self.unpack();
        let b = other.unpack();
        let product = karatsuba_mul(&a.significand, &b.significand, 2 * (M + 1));
        Self::round_and_pack(
            a.sign ^ b.sign,
            &product,
            a.exponent + b.exponent,
            Rounding::NearestEven,
        )
    }
}
