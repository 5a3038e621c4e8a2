use super::SInteger;
use crate::numeric::{BorrowingSub, CarryingAdd};
use crate::uinteger::{max_width, ripple_add, ripple_sub};
use crate::BitStorage;

impl<const W: usize> SInteger<W> {
    /// Adds two signed integers of possibly different widths.
    ///
    /// Both operands are sign-extended to `R = max(W, V) + 1` bits first, so
    /// the sum is exact.
    #[inline]
    pub fn expanding_add<const V: usize, const R: usize>(&self, rhs: &SInteger<V>) -> SInteger<R> {
        const { assert!(R == max_width(W, V) + 1, "expanding_add yields max(W, V) + 1 bits") };
        let a = self.bits.sign_extend(R);
        let b = rhs.as_storage().sign_extend(R);
        SInteger::from_storage_unchecked(ripple_add(&a, &b, false, R))
    }

    /// Subtracts two signed integers of possibly different widths.
    ///
    /// Both operands are sign-extended to `R = max(W, V)` bits; a difference
    /// that does not fit wraps.
    #[inline]
    pub fn expanding_sub<const V: usize, const R: usize>(&self, rhs: &SInteger<V>) -> SInteger<R> {
        const { assert!(R == max_width(W, V), "expanding_sub yields max(W, V) bits") };
        let a = self.bits.sign_extend(R);
        let b = rhs.as_storage().sign_extend(R);
        SInteger::from_storage_unchecked(ripple_sub(&a, &b, R))
    }

    /// Computes `self + rhs`, wrapping around at the boundary of the type.
    #[inline]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(ripple_add(&self.bits, &rhs.bits, false, W))
    }

    /// Computes `self - rhs`, wrapping around at the boundary of the type.
    #[inline]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(ripple_sub(&self.bits, &rhs.bits, W))
    }

    /// Computes `-self` as `!self + 1`.
    ///
    /// The minimum value has no positive counterpart and is its own negation.
    #[inline]
    pub fn wrapping_neg(&self) -> Self {
        Self::from_storage_unchecked(ripple_add(&!&self.bits, &BitStorage::zero(W), true, W))
    }
}

impl_assign_op!(SInteger, AddAssign, add_assign, |lhs, rhs| {
    let mut carry = false;
    for (i, word) in lhs.bits.words_mut().iter_mut().enumerate() {
        let (s, c) = CarryingAdd::carrying_add(*word, rhs.word(i), carry);
        *word = s;
        carry = c;
    }
    lhs.bits.mask();
});

impl_assign_op!(SInteger, SubAssign, sub_assign, |lhs, rhs| {
    let mut borrow = false;
    for (i, word) in lhs.bits.words_mut().iter_mut().enumerate() {
        let (d, b) = BorrowingSub::borrowing_sub(*word, rhs.word(i), borrow);
        *word = d;
        borrow = b;
    }
    lhs.bits.mask();
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_negative_counterpart() {
        let a = SInteger::<16>::from(15i8);
        let a_ = SInteger::<16>::from(-15i8);
        assert!(a.wrapping_add(&a_).is_zero());

        let c = SInteger::<150>::from(1337i16);
        let c_ = SInteger::<150>::from(-1337i16);
        let sum = c.wrapping_add(&c_);
        assert!(sum.is_zero());
        assert!(!sum.is_negative());
        assert_eq!(sum, c_.wrapping_add(&c));

        let d_ = SInteger::<150>::from(-5000i16);
        assert!(c.wrapping_add(&d_).is_negative());
    }

    #[test]
    fn test_zero_plus_negative() {
        let neg = SInteger::<63>::from(-5i8);
        assert_eq!(SInteger::<63>::zero().wrapping_add(&neg), neg);
    }

    #[test]
    fn test_neg() {
        let min = SInteger::<150>::min();
        assert_eq!(min.wrapping_neg(), min);
        assert_eq!(-(-SInteger::<64>::from(-42i8)), SInteger::<64>::from(-42i8));
        assert_eq!((-SInteger::<64>::from(7u8)).as_i64(), -7);
    }

    #[test]
    fn test_expanding_add_sub() {
        let a = SInteger::<32>::from(4i8);
        let b = SInteger::<32>::from(8i8);
        let sum: SInteger<33> = a.expanding_add(&b);
        assert_eq!(sum.as_i64(), 12);
        assert_eq!(b.wrapping_sub(&a).as_i64(), 4);

        let min4 = SInteger::<4>::min();
        let max8 = SInteger::<8>::max();
        let diff: SInteger<8> = min4.expanding_sub(&max8);
        assert_eq!(diff, SInteger::<8>::from(-135i16));

        let min8 = SInteger::<8>::min();
        let max4 = SInteger::<4>::max();
        let diff: SInteger<8> = min8.expanding_sub(&max4);
        let expected = SInteger::<8>::max()
            .wrapping_sub(&max4.width_cast::<8>())
            .wrapping_add(&SInteger::one());
        assert_eq!(diff, expected);
    }

    #[test]
    fn test_min_max_wrap() {
        let min = SInteger::<50>::min();
        let max = SInteger::<50>::max();
        let one = SInteger::<50>::one();
        assert_eq!(max.wrapping_add(&one), min);
        assert_eq!(min.wrapping_sub(&one), max);

        let mut v = max.clone();
        v += &one;
        assert_eq!(v, min);
        v -= one;
        assert_eq!(v, max);
    }
}
