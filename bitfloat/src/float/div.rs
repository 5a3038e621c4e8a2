use bitint::{ArithError, BitStorage, QuotientBits};

use super::{Float, Rounding, Unpacked};

/// Builds the integer division whose quotient carries at least `M + 4`
/// significant bits: the dividend's significand shifted left by the returned
/// amount, and the divisor's significand.
fn division_operands<const M: usize>(a: &Unpacked, b: &Unpacked) -> (BitStorage, BitStorage, usize) {
    let shift = b.significand.bit_length() + M + 4 - a.significand.bit_length();
    let numerator = a.significand.width_cast(M + 1 + shift).shl(shift);
    (numerator, b.significand.clone(), shift)
}

/// A division either settled by the special-value rules or ready to produce
/// quotient bits.
pub(crate) enum Division<const E: usize, const M: usize> {
    Special(Float<E, M>),
    Significands {
        sign: bool,
        exponent: i64,
        bits: QuotientBits,
    },
}

impl<const E: usize, const M: usize> Float<E, M> {
    /// Resolves NaN, infinite and zero operands, or prepares the significand
    /// division of two finite values.
    ///
    /// A zero divisor surfaces as [`ArithError::DivisionByZero`] from the
    /// significand division and becomes a signed infinity.
    pub(crate) fn prepare_division(&self, other: &Self) -> Division<E, M> {
        let sign = self.sign ^ other.sign;
        if self.is_nan() || other.is_nan() {
            return Division::Special(Self::nan());
        }
        match (self.is_inf(), other.is_inf()) {
            (true, true) => return Division::Special(Self::nan()),
            (true, false) => return Division::Special(Self::signed_infinity(sign)),
            (false, true) => return Division::Special(Self::signed_zero(sign)),
            (false, false) => {}
        }
        if self.is_zero() {
            return Division::Special(if other.is_zero() {
                Self::nan()
            } else {
                Self::signed_zero(sign)
            });
        }

        let a = self.unpack();
        let b = other.unpack();
        let (numerator, denominator, shift) = division_operands::<M>(&a, &b);
        match QuotientBits::new(&numerator, &denominator) {
            Ok(bits) => Division::Significands {
                sign,
                exponent: a.exponent - b.exponent - shift as i64,
                bits,
            },
            Err(ArithError::DivisionByZero) => Division::Special(Self::signed_infinity(sign)),
        }
    }

    /// Computes `self / other`, rounded to nearest, ties to even.
    ///
    /// Division by zero is not an error: a nonzero dividend gives a signed
    /// infinity and `0 / 0` gives NaN, as does `inf / inf`.
    pub fn div(&self, other: &Self) -> Self {
        let (sign, exponent, bits) = match self.prepare_division(other) {
            Division::Special(special) => return special,
            Division::Significands {
                sign,
                exponent,
                bits,
            } => (sign, exponent, bits),
        };

        let (mut quotient, remainder) = bits.finish();
        if !remainder.is_zero() {
            quotient.set_bit(0, true);
        }
        Self::round_and_pack(sign, &quotient, exponent, Rounding::NearestEven)
    }
}
