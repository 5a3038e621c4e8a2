use std::cmp::Ordering;

use bitint::uinteger::{ripple_add, ripple_sub};

use super::round::shift_right_jam;
use super::{Float, Rounding, Unpacked};

/// Extra low-order bits kept while aligning addends.
pub(crate) const GUARD_BITS: usize = 3;

impl<const E: usize, const M: usize> Float<E, M> {
    /// Returns the result of `self + other` if either operand is NaN,
    /// infinite or zero.
    pub(crate) fn add_special(&self, other: &Self) -> Option<Self> {
        if self.is_nan() || other.is_nan() {
            return Some(Self::nan());
        }
        if self.is_inf() {
            if other.is_inf() && other.sign != self.sign {
                return Some(Self::nan());
            }
            return Some(self.clone());
        }
        if other.is_inf() {
            return Some(other.clone());
        }
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Some(Self::signed_zero(self.sign && other.sign)),
            (true, false) => Some(other.clone()),
            (false, true) => Some(self.clone()),
            (false, false) => None,
        }
    }

    /// Brings two finite nonzero values to a common exponent.
    ///
    /// Returns the operand with the larger exponent first. Both significands
    /// are widened to `M + 2 + GUARD_BITS` bits and moved up by
    /// [`GUARD_BITS`]; the second one is then shifted right by the exponent
    /// difference with every lost bit jammed into its least significant bit.
    pub(crate) fn align(&self, other: &Self) -> (Unpacked, Unpacked) {
        let width = M + 2 + GUARD_BITS;
        let (a, b) = (self.unpack(), other.unpack());
        let (high, low) = if a.exponent >= b.exponent { (a, b) } else { (b, a) };

        let distance = (high.exponent - low.exponent).min(width as i64) as usize;
        let exponent = high.exponent - GUARD_BITS as i64;
        let widen = |s: &bitint::BitStorage| s.width_cast(width).shl(GUARD_BITS);

        (
            Unpacked {
                sign: high.sign,
                significand: widen(&high.significand),
                exponent,
            },
            Unpacked {
                sign: low.sign,
                significand: shift_right_jam(&widen(&low.significand), distance),
                exponent,
            },
        )
    }

    /// Computes `self + other`, rounded to nearest, ties to even.
    ///
    /// The sum of two zeros is `-0` only if both are `-0`; an exact
    /// cancellation gives `+0`. Infinities of opposite sign give NaN.
    pub fn add(&self, other: &Self) -> Self {
        if let Some(special) = self.add_special(other) {
            return special;
        }

        let (high, low) = self.align(other);
        let width = high.significand.width();

        if high.sign == low.sign {
            let sum = ripple_add(&high.significand, &low.significand, false, width);
            return Self::round_and_pack(high.sign, &sum, high.exponent, Rounding::NearestEven);
        }

        match high.significand.cmp_unsigned(&low.significand) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                let difference = ripple_sub(&high.significand, &low.significand, width);
                Self::round_and_pack(high.sign, &difference, high.exponent, Rounding::NearestEven)
            }
            Ordering::Less => {
                let difference = ripple_sub(&low.significand, &high.significand, width);
                Self::round_and_pack(low.sign, &difference, high.exponent, Rounding::NearestEven)
            }
        }
    }

    /// Computes `self - other` as `self + (-other)`.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }
}
