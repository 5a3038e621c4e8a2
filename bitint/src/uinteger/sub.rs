use std::cmp::Ordering;

use super::{add::ripple_add, max_width, UInteger};
use crate::numeric::BorrowingSub;
use crate::BitStorage;

/// Computes `(a - b) mod 2^width`.
///
/// Uses the identity `a - b = a + !b + 1` at `width` bits; `b` is brought to
/// `width` bits before it is inverted.
#[inline]
pub fn ripple_sub(a: &BitStorage, b: &BitStorage, width: usize) -> BitStorage {
    ripple_add(a, &!&b.width_cast(width), true, width)
}

impl<const W: usize> UInteger<W> {
    /// Subtracts two unsigned integers of possibly different widths.
    ///
    /// The result has the larger of the two widths. Nothing protects against
    /// underflow: if `rhs > self` the difference wraps. `R` must equal
    /// `max(W, V)`.
    #[inline]
    pub fn expanding_sub<const V: usize, const R: usize>(&self, rhs: &UInteger<V>) -> UInteger<R> {
        const { assert!(R == max_width(W, V), "expanding_sub yields max(W, V) bits") };
        UInteger::from_storage_unchecked(ripple_sub(self.as_storage(), rhs.as_storage(), R))
    }

    /// Computes `self - rhs`, wrapping around at `2^W`.
    #[inline]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(ripple_sub(self.as_storage(), rhs.as_storage(), W))
    }

    /// Computes `self - rhs`, returning the wrapped difference and whether a
    /// borrow was needed.
    #[inline]
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        (self.wrapping_sub(rhs), self.cmp(rhs) == Ordering::Less)
    }
}

impl_assign_op!(UInteger, SubAssign, sub_assign, |lhs, rhs| {
    let mut borrow = false;
    for (i, word) in lhs.bits.words_mut().iter_mut().enumerate() {
        let (d, b) = BorrowingSub::borrowing_sub(*word, rhs.word(i), borrow);
        *word = d;
        borrow = b;
    }
    lhs.bits.mask();
});
