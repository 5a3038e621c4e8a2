use super::SInteger;
use crate::uinteger::restoring_division;
use crate::{ArithError, UInteger};

impl<const W: usize> SInteger<W> {
    /// Returns the absolute value.
    ///
    /// The true magnitude of the minimum value, `2^(W-1)`, does not fit, so
    /// `abs(min) == min`. Use [`SInteger::expanding_abs`] for the exact magnitude.
    #[inline]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self.clone()
        }
    }

    /// Returns the exact magnitude as an unsigned integer.
    ///
    /// The extra bit a signed result would need is taken by reading the `W`
    /// bits as unsigned: the magnitude of the minimum is `2^(W-1)`.
    #[inline]
    pub fn expanding_abs(&self) -> UInteger<W> {
        self.abs().to_unsigned()
    }

    /// Divides `self` by `rhs` with truncation towards zero, returning
    /// `(quotient, remainder)` as native integer division does.
    ///
    /// The magnitudes are divided with the unsigned restoring algorithm; the
    /// quotient is negative when the signs differ and the remainder takes the
    /// sign of `self`. `min / -1` wraps to `min` with remainder zero.
    ///
    /// Fails with [`ArithError::DivisionByZero`] if `rhs` is zero.
    pub fn restoring_division(&self, rhs: &Self) -> Result<(Self, Self), ArithError> {
        let numerator = self.expanding_abs();
        let denominator = rhs.expanding_abs();
        let (quotient, remainder) =
            restoring_division(numerator.as_storage(), denominator.as_storage())?;

        let quotient = Self::from_storage_unchecked(quotient);
        let remainder = Self::from_storage_unchecked(remainder);

        let quotient = if self.is_negative() != rhs.is_negative() {
            quotient.wrapping_neg()
        } else {
            quotient
        };
        let remainder = if self.is_negative() {
            remainder.wrapping_neg()
        } else {
            remainder
        };
        Ok((quotient, remainder))
    }

    /// Returns the quotient of `self / rhs`, truncated towards zero.
    ///
    /// Fails with [`ArithError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn div(&self, rhs: &Self) -> Result<Self, ArithError> {
        self.restoring_division(rhs).map(|(q, _)| q)
    }

    /// Returns the remainder of `self / rhs`, carrying the sign of `self`.
    ///
    /// Fails with [`ArithError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn remainder(&self, rhs: &Self) -> Result<Self, ArithError> {
        self.restoring_division(rhs).map(|(_, r)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_divided_by_minus_one() {
        let min = SInteger::<64>::min();
        let (q, r) = min.restoring_division(&SInteger::minus_one()).unwrap();
        assert_eq!(q, min);
        assert!(r.is_zero());
    }

    #[test]
    fn test_truncating_signs() {
        for (n, d) in [(7i64, 2i64), (-7, 2), (7, -2), (-7, -2), (6, 3), (-1, 5)] {
            let (q, r) = SInteger::<64>::from(n)
                .restoring_division(&SInteger::from(d))
                .unwrap();
            assert_eq!(q.as_i64(), n / d, "{n} / {d}");
            assert_eq!(r.as_i64(), n % d, "{n} % {d}");
        }
    }

    #[test]
    fn test_division_by_zero() {
        let n = SInteger::<64>::from(-12i8);
        assert_eq!(n.div(&SInteger::zero()), Err(ArithError::DivisionByZero));
        assert_eq!(
            SInteger::<64>::zero().remainder(&SInteger::zero()),
            Err(ArithError::DivisionByZero)
        );
    }

    #[test]
    fn test_abs_of_min() {
        let min = SInteger::<150>::min();
        assert_eq!(min.abs(), min);

        let magnitude = min.expanding_abs();
        assert_eq!(magnitude.word(0), 0);
        assert_eq!(magnitude.word(1), 0);
        assert_eq!(magnitude.word(2), 1 << 21);
    }
}
