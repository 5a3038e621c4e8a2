use std::cmp::Ordering;

use bitint::uinteger::ripple_sub;
use bitint::BitStorage;

use super::Float;

impl<const E: usize, const M: usize> Float<E, M> {
    /// Exponent and mantissa fields as one `E + M` bit unsigned number.
    ///
    /// For values of one sign this orders like the magnitudes they encode.
    pub(crate) fn magnitude_bits(&self) -> BitStorage {
        let width = E + M;
        let exponent = self.exponent.as_storage().width_cast(width).shl(M);
        &exponent | &self.mantissa.as_storage().width_cast(width)
    }

    /// Returns `true` if both values have identical sign, exponent and
    /// mantissa fields. Unlike `==`, NaNs can be bit-equal and `+0` differs
    /// from `-0`.
    #[inline]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.exponent == other.exponent && self.mantissa == other.mantissa
    }

    /// Returns `true` if `self` and `other` differ at most by one rounding
    /// step.
    ///
    /// Holds when the values compare equal, when both are NaN, and when both
    /// have the same sign and their exponent and mantissa fields, read as one
    /// unsigned number, differ by one. The last case covers two neighbouring
    /// representable values, including the largest finite value and
    /// infinity.
    pub fn equal_except_rounding(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        if self == other {
            return true;
        }
        if self.sign != other.sign {
            return false;
        }

        let a = self.magnitude_bits();
        let b = other.magnitude_bits();
        let difference = match a.cmp_unsigned(&b) {
            Ordering::Greater => ripple_sub(&a, &b, E + M),
            _ => ripple_sub(&b, &a, E + M),
        };
        difference == BitStorage::one(E + M)
    }
}

impl<const E: usize, const M: usize> PartialEq for Float<E, M> {
    /// IEEE equality: NaN equals nothing, `+0 == -0`.
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.bit_eq(other)
    }
}

impl<const E: usize, const M: usize> PartialOrd for Float<E, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if self.is_zero() && other.is_zero() {
            return Some(Ordering::Equal);
        }
        let ordering = match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude_bits().cmp_unsigned(&other.magnitude_bits()),
            (true, true) => other.magnitude_bits().cmp_unsigned(&self.magnitude_bits()),
        };
        Some(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F32 = Float<8, 23>;

    #[test]
    fn test_ieee_equality() {
        assert_eq!(F32::zero(), F32::neg_zero());
        assert!(!F32::zero().bit_eq(&F32::neg_zero()));
        assert_ne!(F32::nan(), F32::nan());
        assert!(F32::nan().bit_eq(&F32::nan()));
    }

    #[test]
    fn test_ordering() {
        let values = [f32::NEG_INFINITY, -2.5, -1.0e-40, -0.0, 1.0e-40, 1.0, 3.5, f32::INFINITY];
        for pair in values.windows(2) {
            assert!(F32::from(pair[0]) < F32::from(pair[1]), "{} < {}", pair[0], pair[1]);
        }
        assert_eq!(F32::from(0.0f32).partial_cmp(&F32::from(-0.0f32)), Some(Ordering::Equal));
        assert_eq!(F32::nan().partial_cmp(&F32::one()), None);
    }

    #[test]
    fn test_equal_except_rounding() {
        let one = F32::one();
        let next = F32::from(f32::from_bits(1.0f32.to_bits() + 1));
        let after = F32::from(f32::from_bits(1.0f32.to_bits() + 2));
        assert!(one.equal_except_rounding(&next));
        assert!(next.equal_except_rounding(&one));
        assert!(!one.equal_except_rounding(&after));
        assert!(!one.equal_except_rounding(&one.neg()));
        assert!(F32::zero().equal_except_rounding(&F32::neg_zero()));
        assert!(F32::nan().equal_except_rounding(&F32::snan()));
        assert!(F32::max().equal_except_rounding(&F32::pos_infinity()));
        assert!(!F32::nan().equal_except_rounding(&F32::one()));
    }
}
